//! Workflow action components.
//!
//! Every action follows the same pipeline: resolve parameters, resolve
//! entities, accumulate validation errors, mutate only when no error was
//! recorded, write the optional result attribute, and append every error to
//! the action log.

mod group_add;
mod registrant_add;
mod registration_add;
mod request_add;

use async_trait::async_trait;
use pillars_core::AppResult;

use crate::action_context::{ActionContext, ParameterSpec};

pub use group_add::{GroupAdd, GroupAddConfig};
pub use registrant_add::{RegistrantAdd, RegistrantAddConfig};
pub use registration_add::{RegistrationAdd, RegistrationAddConfig};
pub use request_add::{RequestAdd, RequestAddConfig};

/// A single workflow action invoked by the host engine.
#[async_trait]
pub trait ActionComponent: Send + Sync {
    /// Stable identifier used by the registry.
    fn action_type(&self) -> &'static str;

    /// Human-facing component name.
    fn display_name(&self) -> &'static str;

    /// Ordered parameter manifest for the host configuration surface.
    fn parameters(&self) -> &'static [ParameterSpec];

    /// Runs the action. `Ok(bool)` is the action's own completion signal;
    /// `Err` is reserved for infrastructure failure.
    async fn execute(&self, context: &mut ActionContext) -> AppResult<bool>;
}
