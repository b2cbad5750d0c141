//! Typed row identifiers for host-owned entities.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a persisted row identifier.
            #[must_use]
            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the underlying row identifier.
            #[must_use]
            pub fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Person row identifier.
    PersonId
);
entity_id!(
    /// Person alias row identifier.
    PersonAliasId
);
entity_id!(
    /// Registration instance row identifier.
    RegistrationInstanceId
);
entity_id!(
    /// Registration row identifier.
    RegistrationId
);
entity_id!(
    /// Registrant row identifier.
    RegistrantId
);
entity_id!(
    /// Group type row identifier.
    GroupTypeId
);
entity_id!(
    /// Group row identifier.
    GroupId
);
entity_id!(
    /// Prayer request row identifier.
    PrayerRequestId
);
entity_id!(
    /// Campus row identifier.
    CampusId
);
entity_id!(
    /// Category row identifier.
    CategoryId
);
