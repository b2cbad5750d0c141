//! Adds a new group, optionally reusing an identical existing one.

use std::sync::Arc;

use async_trait::async_trait;
use pillars_core::AppResult;
use pillars_domain::{EntityKey, GroupMatch, NewGroup};
use serde::Deserialize;

use crate::action_context::{ActionContext, ParameterSource, ParameterSpec};
use crate::actions::ActionComponent;
use crate::entity_resolver::resolve_group_type;
use crate::store_ports::{GroupStore, GroupTypeCache};

/// Configuration for [`GroupAdd`].
#[derive(Debug, Clone, Deserialize)]
pub struct GroupAddConfig {
    /// GUID of the type of group to add.
    pub group_type: ParameterSource,
    /// Name of the group to add.
    pub group_name: ParameterSource,
    /// Optional GUID of the parent group. When absent or unresolvable the
    /// group is added without a parent.
    #[serde(default)]
    pub parent_group: Option<ParameterSource>,
    /// Optional attribute to set to the created or found group's GUID.
    #[serde(default)]
    pub result_attribute: Option<String>,
    /// Whether an existing group with the same type, name, and parent
    /// should be used instead of creating a duplicate.
    #[serde(default = "default_check_existing")]
    pub check_existing: bool,
}

fn default_check_existing() -> bool {
    true
}

const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "group_type",
        field_type: "group_type",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "group_name",
        field_type: "text",
        required: true,
        default: None,
    },
    ParameterSpec {
        name: "parent_group",
        field_type: "group",
        required: false,
        default: None,
    },
    ParameterSpec {
        name: "result_attribute",
        field_type: "group",
        required: false,
        default: None,
    },
    ParameterSpec {
        name: "check_existing",
        field_type: "boolean",
        required: true,
        default: Some("true"),
    },
];

/// Creates a group by (type, name, parent), or finds an exact existing
/// match when configured to.
pub struct GroupAdd {
    config: GroupAddConfig,
    groups: Arc<dyn GroupStore>,
    group_types: Arc<dyn GroupTypeCache>,
}

impl GroupAdd {
    /// Stable registry identifier.
    pub const ACTION_TYPE: &'static str = "group_add";

    /// Creates the action over its configuration and store ports.
    #[must_use]
    pub fn new(
        config: GroupAddConfig,
        groups: Arc<dyn GroupStore>,
        group_types: Arc<dyn GroupTypeCache>,
    ) -> Self {
        Self {
            config,
            groups,
            group_types,
        }
    }
}

#[async_trait]
impl ActionComponent for GroupAdd {
    fn action_type(&self) -> &'static str {
        Self::ACTION_TYPE
    }

    fn display_name(&self) -> &'static str {
        "Group Add"
    }

    fn parameters(&self) -> &'static [ParameterSpec] {
        PARAMETERS
    }

    async fn execute(&self, context: &mut ActionContext) -> AppResult<bool> {
        let mut errors: Vec<String> = Vec::new();

        let group_type_value = context
            .parameter_value(&self.config.group_type)
            .await?
            .unwrap_or_default();
        let group_type =
            resolve_group_type(self.group_types.as_ref(), self.groups.as_ref(), &group_type_value)
                .await?;
        if group_type.is_none() {
            errors.push("The Group Type could not be determined or found!".to_owned());
        }

        let group_name = context
            .parameter_value(&self.config.group_name)
            .await?
            .unwrap_or_default();
        if group_name.trim().is_empty() {
            errors.push("The Group Name could not be determined or found!".to_owned());
        }

        let parent_group_value = context
            .optional_parameter_value(self.config.parent_group.as_ref())
            .await?;
        let parent_group = match parent_group_value.as_deref().and_then(EntityKey::parse) {
            Some(EntityKey::Guid(guid)) => self.groups.find_group_by_guid(guid).await?,
            _ => None,
        };

        if errors.is_empty()
            && let Some(group_type) = group_type
        {
            let parent_group_id = parent_group.as_ref().map(|group| group.id);

            let mut group = None;
            if self.config.check_existing {
                group = self
                    .groups
                    .find_matching_group(&GroupMatch {
                        group_type_id: group_type.id,
                        name: group_name.clone(),
                        parent_group_id,
                    })
                    .await?;
            }

            let group = match group {
                Some(existing) => existing,
                None => {
                    self.groups
                        .add_group(NewGroup {
                            group_type_id: group_type.id,
                            name: group_name.clone(),
                            parent_group_id,
                        })
                        .await?
                }
            };

            context
                .write_result(self.config.result_attribute.as_deref(), &group.guid.to_string())
                .await?;
        }

        context.log_errors(&errors);

        Ok(errors.is_empty())
    }
}
