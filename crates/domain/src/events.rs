//! Event registrations and registrants.

use pillars_core::{PersonAliasId, RegistrantId, RegistrationId, RegistrationInstanceId};
use serde::{Deserialize, Serialize};

/// A specific offering of an event that registrations are created against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInstance {
    /// Row identifier.
    pub id: RegistrationInstanceId,
    /// Display name.
    pub name: String,
}

/// A registration created under a registration instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Row identifier.
    pub id: RegistrationId,
    /// The instance this registration belongs to.
    pub registration_instance_id: RegistrationInstanceId,
    /// Alias of the registrar.
    pub person_alias_id: PersonAliasId,
    /// Denormalized registrar first name.
    pub first_name: String,
    /// Denormalized registrar last name.
    pub last_name: String,
    /// Denormalized registrar email.
    pub confirmation_email: Option<String>,
    /// Whether the registration is still a temporary placeholder.
    pub is_temporary: bool,
}

/// Input for creating a registration row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    /// The instance the registration is created under.
    pub registration_instance_id: RegistrationInstanceId,
    /// Alias of the registrar.
    pub person_alias_id: PersonAliasId,
    /// Denormalized registrar first name.
    pub first_name: String,
    /// Denormalized registrar last name.
    pub last_name: String,
    /// Denormalized registrar email.
    pub confirmation_email: Option<String>,
    /// Whether the registration is a temporary placeholder.
    pub is_temporary: bool,
}

/// A person's enrollment record within a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRegistrant {
    /// Row identifier.
    pub id: RegistrantId,
    /// The registration this registrant belongs to.
    pub registration_id: RegistrationId,
    /// Alias of the registered person.
    pub person_alias_id: PersonAliasId,
}

/// Input for creating a registrant row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistrant {
    /// The registration the registrant is added to.
    pub registration_id: RegistrationId,
    /// Alias of the registered person.
    pub person_alias_id: PersonAliasId,
}
