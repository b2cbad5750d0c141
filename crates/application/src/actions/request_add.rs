//! Adds a prayer request.

use std::sync::Arc;

use async_trait::async_trait;
use pillars_core::AppResult;
use pillars_domain::{EntityKey, NewPrayerRequest, lenient_bool};
use serde::Deserialize;

use crate::action_context::{ActionContext, ParameterSource, ParameterSpec};
use crate::actions::ActionComponent;
use crate::entity_resolver::person_by_alias_guid;
use crate::store_ports::{CampusCache, CategoryStore, PersonStore, PrayerRequestStore};

/// Configuration for [`RequestAdd`].
#[derive(Debug, Clone, Deserialize)]
pub struct RequestAddConfig {
    /// Person-alias GUID of the requester.
    pub person: ParameterSource,
    /// The prayer request text.
    pub request_text: ParameterSource,
    /// Optional flag making the request publicly visible.
    #[serde(default)]
    pub is_public: Option<ParameterSource>,
    /// Optional GUID of the campus the request is associated with.
    #[serde(default)]
    pub campus: Option<ParameterSource>,
    /// Optional GUID of the category the request belongs to.
    #[serde(default)]
    pub category: Option<ParameterSource>,
    /// Optional attribute to set to the created request's id.
    #[serde(default)]
    pub result_attribute: Option<String>,
}

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "person",
        field_type: "person",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "request_text",
        field_type: "memo",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "is_public",
        field_type: "boolean",
        required: false,
        default: None,
    },
    ParameterSpec {
        name: "campus",
        field_type: "campus",
        required: false,
        default: None,
    },
    ParameterSpec {
        name: "category",
        field_type: "category",
        required: false,
        default: None,
    },
    ParameterSpec {
        name: "result_attribute",
        field_type: "attribute",
        required: false,
        default: None,
    },
];

/// Creates one prayer request for a person, denormalizing the requester's
/// name and email onto the row.
pub struct RequestAdd {
    config: RequestAddConfig,
    people: Arc<dyn PersonStore>,
    prayer: Arc<dyn PrayerRequestStore>,
    campuses: Arc<dyn CampusCache>,
    categories: Arc<dyn CategoryStore>,
}

impl RequestAdd {
    /// Stable registry identifier.
    pub const ACTION_TYPE: &'static str = "request_add";

    /// Creates the action over its configuration and store ports.
    #[must_use]
    pub fn new(
        config: RequestAddConfig,
        people: Arc<dyn PersonStore>,
        prayer: Arc<dyn PrayerRequestStore>,
        campuses: Arc<dyn CampusCache>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        Self {
            config,
            people,
            prayer,
            campuses,
            categories,
        }
    }
}

#[async_trait]
impl ActionComponent for RequestAdd {
    fn action_type(&self) -> &'static str {
        Self::ACTION_TYPE
    }

    fn display_name(&self) -> &'static str {
        "Request Add"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    async fn execute(&self, context: &mut ActionContext) -> AppResult<bool> {
        let mut errors: Vec<String> = Vec::new();

        let person_value = context
            .parameter_value(&self.config.person)
            .await?
            .unwrap_or_default();
        let requester = person_by_alias_guid(self.people.as_ref(), &person_value).await?;
        let requester_alias_id = requester.as_ref().and_then(|person| person.primary_alias_id);
        if requester_alias_id.is_none() {
            errors.push(
                "The Person for the prayer request could not be determined or found!".to_owned(),
            );
        }

        let request_text = context
            .parameter_value(&self.config.request_text)
            .await?
            .unwrap_or_default();
        if request_text.trim().is_empty() {
            errors.push(
                "The contents of the prayer request could not be determined or found!".to_owned(),
            );
        }

        let is_public = lenient_bool(
            &context
                .optional_parameter_value(self.config.is_public.as_ref())
                .await?
                .unwrap_or_default(),
        );

        let campus_value = context
            .optional_parameter_value(self.config.campus.as_ref())
            .await?;
        let campus = match campus_value.as_deref().and_then(EntityKey::parse) {
            Some(EntityKey::Guid(guid)) => self.campuses.get_by_guid(guid).await?,
            _ => None,
        };

        if errors.is_empty()
            && let Some(requester) = requester
            && let Some(requested_by_person_alias_id) = requester_alias_id
        {
            let category_value = context
                .optional_parameter_value(self.config.category.as_ref())
                .await?;
            let category = match category_value.as_deref().and_then(EntityKey::parse) {
                Some(EntityKey::Guid(guid)) => {
                    self.categories.find_category_by_guid(guid).await?
                }
                _ => None,
            };

            let request = self
                .prayer
                .add_prayer_request(NewPrayerRequest::entered_now(
                    requested_by_person_alias_id,
                    requester.nick_name.clone(),
                    requester.last_name.clone(),
                    requester.email.clone(),
                    request_text,
                    is_public,
                    campus.map(|campus| campus.id),
                    category.map(|category| category.id),
                ))
                .await?;

            context
                .write_result(self.config.result_attribute.as_deref(), &request.id.to_string())
                .await?;
        }

        context.log_errors(&errors);

        Ok(errors.is_empty())
    }
}
