//! Error types for connected-account validation.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The user identifier is empty or contains whitespace.
    #[error("invalid user identifier '{0}'")]
    InvalidUserId(String),

    /// The account username is empty after trimming.
    #[error("account username must not be empty")]
    EmptyUsername,
}
