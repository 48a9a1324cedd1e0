//! Authentication error types.

use thiserror::Error;

use crate::persist::PersistError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] stylestore_core::EmailError),

    /// Wrong credentials or no stored account.
    ///
    /// Deliberately does not say which field was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),
}
