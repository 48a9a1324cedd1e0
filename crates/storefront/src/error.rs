//! Unified error handling.
//!
//! Provides a single `AppError` for the storefront facade. Every error here
//! is recoverable at the call site: validation and authentication failures
//! are reported back to the form, unknown orders render a not-found page,
//! and persistence problems degrade rather than crash.

use thiserror::Error;

use crate::config::ConfigError;
use crate::persist::PersistError;
use crate::services::AuthError;
use crate::validation::ValidationErrors;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more form fields failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Persistence operation failed.
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request from the caller.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// The per-field messages, when this is a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AppError::NotFound("order 123".to_owned());
        assert_eq!(err.to_string(), "not found: order 123");
    }

    #[test]
    fn test_auth_error_is_generic() {
        let err = AppError::Auth(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "auth error: invalid email or password");
    }
}
