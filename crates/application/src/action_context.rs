//! Per-invocation execution context: parameter resolution, result
//! write-back, and the action log.

use std::sync::Arc;

use pillars_core::AppResult;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store_ports::WorkflowAttributeStore;

/// Where a configured parameter's runtime value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// A literal value configured on the action.
    Literal(String),
    /// The value of a named attribute on the running workflow instance.
    Attribute(String),
}

/// One entry of an action's ordered parameter manifest, published so the
/// host's configuration surface can render the action without reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Stable parameter name.
    pub name: &'static str,
    /// Field type tag understood by the host configuration surface.
    pub field_type: &'static str,
    /// Whether the parameter must resolve for the action to mutate anything.
    pub required: bool,
    /// Default raw value, when one applies.
    pub default: Option<&'static str>,
}

/// Execution context handed to one action invocation.
pub struct ActionContext {
    attributes: Arc<dyn WorkflowAttributeStore>,
    log_entries: Vec<String>,
}

impl ActionContext {
    /// Creates a context over the running workflow instance's attributes.
    #[must_use]
    pub fn new(attributes: Arc<dyn WorkflowAttributeStore>) -> Self {
        Self {
            attributes,
            log_entries: Vec::new(),
        }
    }

    /// Resolves a parameter to its runtime value: the literal text when the
    /// parameter is configured with one, otherwise the named attribute's
    /// value. Blank results resolve to `None`; validation decides what that
    /// means for the action.
    pub async fn parameter_value(&self, source: &ParameterSource) -> AppResult<Option<String>> {
        let value = match source {
            ParameterSource::Literal(text) => Some(text.clone()),
            ParameterSource::Attribute(name) => self.attributes.attribute_value(name).await?,
        };

        Ok(value.filter(|resolved| !resolved.trim().is_empty()))
    }

    /// Resolves an optional parameter; an unconfigured parameter resolves
    /// to `None` without touching the attribute store.
    pub async fn optional_parameter_value(
        &self,
        source: Option<&ParameterSource>,
    ) -> AppResult<Option<String>> {
        match source {
            Some(source) => self.parameter_value(source).await,
            None => Ok(None),
        }
    }

    /// Writes a derived value into the optionally-configured result
    /// attribute and logs the write. Skipped silently when no attribute is
    /// configured or the instance carries no attribute with that name.
    pub async fn write_result(&mut self, attribute: Option<&str>, value: &str) -> AppResult<()> {
        let Some(attribute) = attribute else {
            return Ok(());
        };

        if let Some(written) = self.attributes.set_attribute_value(attribute, value).await? {
            info!(attribute = written.as_str(), value = value, "set workflow attribute");
            self.add_log_entry(format!("Set '{written}' attribute to '{value}'."));
        }

        Ok(())
    }

    /// Appends one line to the action log.
    pub fn add_log_entry(&mut self, message: impl Into<String>) {
        self.log_entries.push(message.into());
    }

    /// Appends every accumulated error message to the action log.
    pub fn log_errors(&mut self, errors: &[String]) {
        for message in errors {
            self.log_entries.push(message.clone());
        }
    }

    /// Returns the log lines appended during this invocation.
    #[must_use]
    pub fn log_entries(&self) -> &[String] {
        &self.log_entries
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use pillars_core::AppResult;
    use tokio::sync::Mutex;

    use super::{ActionContext, ParameterSource};
    use crate::store_ports::WorkflowAttributeStore;

    struct FakeAttributeStore {
        values: Mutex<HashMap<String, String>>,
    }

    impl FakeAttributeStore {
        fn with(values: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                values: Mutex::new(
                    values
                        .iter()
                        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                        .collect(),
                ),
            })
        }
    }

    #[async_trait]
    impl WorkflowAttributeStore for FakeAttributeStore {
        async fn attribute_value(&self, name: &str) -> AppResult<Option<String>> {
            Ok(self.values.lock().await.get(name).cloned())
        }

        async fn set_attribute_value(
            &self,
            name: &str,
            value: &str,
        ) -> AppResult<Option<String>> {
            let mut values = self.values.lock().await;
            if !values.contains_key(name) {
                return Ok(None);
            }

            values.insert(name.to_owned(), value.to_owned());
            Ok(Some(name.to_owned()))
        }
    }

    #[tokio::test]
    async fn literal_text_wins_over_attributes() {
        let context = ActionContext::new(FakeAttributeStore::with(&[("Count", "9")]));

        let value = context
            .parameter_value(&ParameterSource::Literal("42".to_owned()))
            .await;

        assert!(value.is_ok());
        assert_eq!(value.unwrap_or_default().as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn attribute_parameters_resolve_by_name() {
        let context = ActionContext::new(FakeAttributeStore::with(&[("Count", "9")]));

        let hit = context
            .parameter_value(&ParameterSource::Attribute("Count".to_owned()))
            .await;
        let miss = context
            .parameter_value(&ParameterSource::Attribute("Missing".to_owned()))
            .await;

        assert!(hit.is_ok());
        assert_eq!(hit.unwrap_or_default().as_deref(), Some("9"));
        assert!(miss.is_ok());
        assert_eq!(miss.unwrap_or_default(), None);
    }

    #[tokio::test]
    async fn blank_values_resolve_to_none() {
        let context = ActionContext::new(FakeAttributeStore::with(&[("Blank", "  ")]));

        let literal = context
            .parameter_value(&ParameterSource::Literal("   ".to_owned()))
            .await;
        let attribute = context
            .parameter_value(&ParameterSource::Attribute("Blank".to_owned()))
            .await;

        assert!(literal.is_ok_and(|value| value.is_none()));
        assert!(attribute.is_ok_and(|value| value.is_none()));
    }

    #[tokio::test]
    async fn result_write_logs_the_attribute_and_value() {
        let store = FakeAttributeStore::with(&[("Result", "")]);
        let mut context = ActionContext::new(store.clone());

        let written = context.write_result(Some("Result"), "17").await;

        assert!(written.is_ok());
        assert_eq!(
            store.values.lock().await.get("Result").map(String::as_str),
            Some("17")
        );
        assert_eq!(
            context.log_entries(),
            ["Set 'Result' attribute to '17'.".to_owned()]
        );
    }

    #[tokio::test]
    async fn result_write_to_unknown_attribute_is_a_no_op() {
        let mut context = ActionContext::new(FakeAttributeStore::with(&[]));

        let written = context.write_result(Some("Missing"), "17").await;

        assert!(written.is_ok());
        assert!(context.log_entries().is_empty());
    }
}
