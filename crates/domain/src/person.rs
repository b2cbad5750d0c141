//! People and their aliases. Read-only from this repository's point of view.

use pillars_core::{PersonAliasId, PersonId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person known to the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Row identifier.
    pub id: PersonId,
    /// Preferred first name used for denormalized name fields.
    pub nick_name: String,
    /// Last name.
    pub last_name: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Canonical alias row for this person, when one exists.
    pub primary_alias_id: Option<PersonAliasId>,
}

/// An alias row pointing at a person. Entity references to people are stored
/// through alias ids; workflow attributes reference aliases by GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAlias {
    /// Row identifier.
    pub id: PersonAliasId,
    /// Stable GUID identity.
    pub guid: Uuid,
    /// The person this alias belongs to.
    pub person_id: PersonId,
}
