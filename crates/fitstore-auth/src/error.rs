//! Authentication errors.

use fitstore_commerce::CommerceError;
use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No demo account matches the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Form validation failed; the message is shown inline.
    #[error("{0}")]
    Validation(String),

    /// The operation needs a logged-in user.
    #[error("not logged in")]
    NotAuthenticated,

    /// Unknown role name.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// Address or other domain error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Cache error.
    #[error("cache error: {0}")]
    Cache(#[from] fitstore_cache::CacheError),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::NotAuthenticated)
    }
}
