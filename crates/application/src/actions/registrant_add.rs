//! Adds a registrant to an existing registration.

use std::sync::Arc;

use async_trait::async_trait;
use pillars_core::{AppResult, RegistrationId};
use pillars_domain::NewRegistrant;
use serde::Deserialize;

use crate::action_context::{ActionContext, ParameterSource, ParameterSpec};
use crate::actions::ActionComponent;
use crate::entity_resolver::resolve_people;
use crate::store_ports::{EventStore, PersonStore};

/// Configuration for [`RegistrantAdd`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrantAddConfig {
    /// Row id of the registration the registrant(s) are added to.
    pub registration_id: ParameterSource,
    /// Person-alias GUID, or a delimited list of person ids, to add.
    pub registrants: ParameterSource,
}

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "registration_id",
        field_type: "integer",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "registrants",
        field_type: "person",
        required: true,
        default: None,
    },
];

/// Adds one registrant row per resolved person to an existing registration.
pub struct RegistrantAdd {
    config: RegistrantAddConfig,
    people: Arc<dyn PersonStore>,
    events: Arc<dyn EventStore>,
}

impl RegistrantAdd {
    /// Stable registry identifier.
    pub const ACTION_TYPE: &'static str = "registrant_add";

    /// Creates the action over its configuration and store ports.
    #[must_use]
    pub fn new(
        config: RegistrantAddConfig,
        people: Arc<dyn PersonStore>,
        events: Arc<dyn EventStore>,
    ) -> Self {
        Self {
            config,
            people,
            events,
        }
    }
}

#[async_trait]
impl ActionComponent for RegistrantAdd {
    fn action_type(&self) -> &'static str {
        Self::ACTION_TYPE
    }

    fn display_name(&self) -> &'static str {
        "Registrant Add"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    /// Always signals completion as success: failed lookups surface only
    /// through the action log, and people in a mixed list who did resolve
    /// still get registrant rows.
    async fn execute(&self, context: &mut ActionContext) -> AppResult<bool> {
        let mut errors: Vec<String> = Vec::new();

        let registration_value = context
            .parameter_value(&self.config.registration_id)
            .await?
            .unwrap_or_default();
        let registration = match registration_value.trim().parse::<i32>() {
            Ok(id) => self.events.find_registration(RegistrationId::new(id)).await?,
            Err(_) => None,
        };
        if registration.is_none() {
            errors.push("The Registration could not be determined or found!".to_owned());
        }

        let registrants_value = context
            .parameter_value(&self.config.registrants)
            .await?
            .unwrap_or_default();
        let people = resolve_people(self.people.as_ref(), &registrants_value).await?;
        if people.is_empty() {
            errors.push("The Registrant(s) could not be determined or found!".to_owned());
        }

        if errors.is_empty()
            && let Some(registration) = registration
        {
            for person in &people {
                // People without a primary alias cannot be enrolled.
                if let Some(person_alias_id) = person.primary_alias_id {
                    self.events
                        .add_registrant(NewRegistrant {
                            registration_id: registration.id,
                            person_alias_id,
                        })
                        .await?;
                }
            }
        }

        context.log_errors(&errors);

        Ok(true)
    }
}
