//! Error types for generation request validation.

use crate::platform::domain::PlatformDomainError;
use thiserror::Error;

/// Errors returned while constructing generation requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentDomainError {
    /// The prompt is empty after trimming.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The style platform is not supported.
    #[error(transparent)]
    Platform(#[from] PlatformDomainError),
}
