//! Prayer requests.

use chrono::{DateTime, Utc};
use pillars_core::{CampusId, CategoryId, PersonAliasId, PrayerRequestId};
use serde::{Deserialize, Serialize};

/// A prayer request entered on behalf of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRequest {
    /// Row identifier.
    pub id: PrayerRequestId,
    /// Alias of the requester.
    pub requested_by_person_alias_id: PersonAliasId,
    /// Denormalized requester first name.
    pub first_name: String,
    /// Denormalized requester last name.
    pub last_name: String,
    /// Denormalized requester email.
    pub email: Option<String>,
    /// The request text.
    pub text: String,
    /// Whether the request is visible publicly.
    pub is_public: bool,
    /// Whether the request is active.
    pub is_active: bool,
    /// Whether the request has been approved for display.
    pub is_approved: bool,
    /// Whether comments are allowed on the request.
    pub allow_comments: bool,
    /// Optional campus association.
    pub campus_id: Option<CampusId>,
    /// Optional category association.
    pub category_id: Option<CategoryId>,
    /// When the request was entered.
    pub entered_at: DateTime<Utc>,
}

/// Input for creating a prayer request row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPrayerRequest {
    /// Alias of the requester.
    pub requested_by_person_alias_id: PersonAliasId,
    /// Denormalized requester first name.
    pub first_name: String,
    /// Denormalized requester last name.
    pub last_name: String,
    /// Denormalized requester email.
    pub email: Option<String>,
    /// The request text.
    pub text: String,
    /// Whether the request is visible publicly.
    pub is_public: bool,
    /// Whether the request is active.
    pub is_active: bool,
    /// Whether the request has been approved for display.
    pub is_approved: bool,
    /// Whether comments are allowed on the request.
    pub allow_comments: bool,
    /// Optional campus association.
    pub campus_id: Option<CampusId>,
    /// Optional category association.
    pub category_id: Option<CategoryId>,
    /// When the request was entered.
    pub entered_at: DateTime<Utc>,
}

impl NewPrayerRequest {
    /// Creates a request input with the fixed creation defaults: active, not
    /// yet approved, comments disabled.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn entered_now(
        requested_by_person_alias_id: PersonAliasId,
        first_name: String,
        last_name: String,
        email: Option<String>,
        text: String,
        is_public: bool,
        campus_id: Option<CampusId>,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            requested_by_person_alias_id,
            first_name,
            last_name,
            email,
            text,
            is_public,
            is_active: true,
            is_approved: false,
            allow_comments: false,
            campus_id,
            category_id,
            entered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pillars_core::PersonAliasId;

    use super::NewPrayerRequest;

    #[test]
    fn entered_now_applies_creation_defaults() {
        let request = NewPrayerRequest::entered_now(
            PersonAliasId::new(4),
            "Ted".to_owned(),
            "Decker".to_owned(),
            None,
            "Safe travels".to_owned(),
            true,
            None,
            None,
        );

        assert!(request.is_active);
        assert!(!request.is_approved);
        assert!(!request.allow_comments);
        assert!(request.is_public);
    }
}
