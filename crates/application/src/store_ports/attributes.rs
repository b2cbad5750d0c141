use async_trait::async_trait;
use pillars_core::AppResult;

/// Port over the attribute store of the running workflow instance.
///
/// Attributes are a name-to-value mapping owned by the host workflow
/// engine; actions read parameter values from it and may write one result
/// value back.
#[async_trait]
pub trait WorkflowAttributeStore: Send + Sync {
    /// Returns the value of a named attribute, or `None` when the instance
    /// carries no attribute with that name.
    async fn attribute_value(&self, name: &str) -> AppResult<Option<String>>;

    /// Writes a value into a named attribute. Returns the name of the
    /// attribute written, or `None` when the instance carries no attribute
    /// with that name; writing to an unknown attribute is a no-op, not an
    /// error.
    async fn set_attribute_value(&self, name: &str, value: &str) -> AppResult<Option<String>>;
}
