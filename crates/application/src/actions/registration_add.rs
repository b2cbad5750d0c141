//! Adds a registration and registrar to a specific event instance.

use std::sync::Arc;

use async_trait::async_trait;
use pillars_core::{AppResult, RegistrationInstanceId};
use pillars_domain::NewRegistration;
use serde::Deserialize;

use crate::action_context::{ActionContext, ParameterSource, ParameterSpec};
use crate::actions::ActionComponent;
use crate::entity_resolver::person_by_alias_guid;
use crate::store_ports::{EventStore, PersonStore};

/// Configuration for [`RegistrationAdd`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationAddConfig {
    /// Row id of the registration instance the registration is added to.
    pub registration_instance_id: ParameterSource,
    /// Person-alias GUID of the registrar.
    pub registrar: ParameterSource,
    /// Optional attribute to set to the created registration's id.
    #[serde(default)]
    pub result_attribute: Option<String>,
}

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "registration_instance_id",
        field_type: "integer",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "registrar",
        field_type: "person",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "result_attribute",
        field_type: "attribute",
        required: false,
        default: None,
    },
];

/// Creates one registration under a registration instance, denormalizing
/// the registrar's name and email onto the row.
pub struct RegistrationAdd {
    config: RegistrationAddConfig,
    people: Arc<dyn PersonStore>,
    events: Arc<dyn EventStore>,
}

impl RegistrationAdd {
    /// Stable registry identifier.
    pub const ACTION_TYPE: &'static str = "registration_add";

    /// Creates the action over its configuration and store ports.
    #[must_use]
    pub fn new(
        config: RegistrationAddConfig,
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
impl ActionComponent for RegistrationAdd {
    fn action_type(&self) -> &'static str {
        Self::ACTION_TYPE
    }

    fn display_name(&self) -> &'static str {
        "Registration Add"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    async fn execute(&self, context: &mut ActionContext) -> AppResult<bool> {
        let mut errors: Vec<String> = Vec::new();

        let instance_value = context
            .parameter_value(&self.config.registration_instance_id)
            .await?
            .unwrap_or_default();
        let instance = match instance_value.trim().parse::<i32>() {
            Ok(id) => {
                self.events
                    .find_registration_instance(RegistrationInstanceId::new(id))
                    .await?
            }
            Err(_) => None,
        };
        if instance.is_none() {
            errors.push("The Registration Instance could not be determined or found!".to_owned());
        }

        let registrar_value = context
            .parameter_value(&self.config.registrar)
            .await?
            .unwrap_or_default();
        let registrar = person_by_alias_guid(self.people.as_ref(), &registrar_value).await?;
        let registrar_alias_id = registrar.as_ref().and_then(|person| person.primary_alias_id);
        if registrar_alias_id.is_none() {
            errors
                .push("The Person for the Registrar value could not be determined or found!".to_owned());
        }

        if errors.is_empty()
            && let Some(instance) = instance
            && let Some(registrar) = registrar
            && let Some(person_alias_id) = registrar_alias_id
        {
            let registration = self
                .events
                .add_registration(NewRegistration {
                    registration_instance_id: instance.id,
                    person_alias_id,
                    first_name: registrar.nick_name.clone(),
                    last_name: registrar.last_name.clone(),
                    confirmation_email: registrar.email.clone(),
                    is_temporary: false,
                })
                .await?;

            context
                .write_result(
                    self.config.result_attribute.as_deref(),
                    &registration.id.to_string(),
                )
                .await?;
        }

        context.log_errors(&errors);

        Ok(errors.is_empty())
    }
}
