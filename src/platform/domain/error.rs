//! Error types for platform identifiers and target-platform sets.

use thiserror::Error;

/// Errors returned while constructing platform domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformDomainError {
    /// The platform identifier is not one of the supported platforms.
    #[error("unsupported platform: {0}")]
    UnknownPlatform(String),

    /// The comma-joined platform list contains a blank segment.
    #[error("platform list '{0}' contains an empty entry")]
    EmptyPlatformSegment(String),

    /// No platform was supplied.
    #[error("at least one platform must be selected")]
    EmptyPlatformSet,

    /// The external post identifier is empty after trimming.
    #[error("external post identifier must not be empty")]
    EmptyExternalPostId,
}
