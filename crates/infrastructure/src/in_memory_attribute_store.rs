//! In-memory workflow attribute store for tests and development hosts.

use std::collections::HashMap;

use async_trait::async_trait;
use pillars_application::WorkflowAttributeStore;
use pillars_core::AppResult;
use tokio::sync::RwLock;

/// In-memory adapter over a workflow instance's name-to-value attributes.
///
/// Only attributes defined up front can be written; writing to an unknown
/// name is a no-op, matching the host engine's behavior for attributes the
/// instance does not carry.
#[derive(Default)]
pub struct InMemoryWorkflowAttributeStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryWorkflowAttributeStore {
    /// Creates a store with no attributes defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines an attribute on the instance with an initial value.
    pub async fn define_attribute(&self, name: &str, value: &str) {
        self.values
            .write()
            .await
            .insert(name.to_owned(), value.to_owned());
    }

    /// Returns the current value of a named attribute.
    pub async fn value_of(&self, name: &str) -> Option<String> {
        self.values.read().await.get(name).cloned()
    }
}

#[async_trait]
impl WorkflowAttributeStore for InMemoryWorkflowAttributeStore {
    async fn attribute_value(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.values.read().await.get(name).cloned())
    }

    async fn set_attribute_value(&self, name: &str, value: &str) -> AppResult<Option<String>> {
        let mut values = self.values.write().await;
        if !values.contains_key(name) {
            return Ok(None);
        }

        values.insert(name.to_owned(), value.to_owned());
        Ok(Some(name.to_owned()))
    }
}
