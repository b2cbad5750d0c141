//! Shared primitives for all Rust crates in Pillars.

#![forbid(unsafe_code)]

mod ids;

use thiserror::Error;

pub use ids::{
    CampusId, CategoryId, GroupId, GroupTypeId, PersonAliasId, PersonId, PrayerRequestId,
    RegistrantId, RegistrationId, RegistrationInstanceId,
};

/// Result type used across Pillars crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, GroupId, PersonId};

    #[test]
    fn entity_ids_compare_by_value() {
        assert_eq!(PersonId::new(7), PersonId::new(7));
        assert_ne!(GroupId::new(7), GroupId::new(8));
    }

    #[test]
    fn entity_ids_format_as_decimal() {
        assert_eq!(PersonId::new(42).to_string(), "42");
    }

    #[test]
    fn errors_render_with_category_prefix() {
        let error = AppError::NotFound("person '9' not found".to_owned());
        assert_eq!(error.to_string(), "not found: person '9' not found");
    }
}
