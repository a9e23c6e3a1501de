//! Publishing capability implemented once per platform.

use crate::account::domain::AccountCredential;
use crate::platform::domain::{ExternalPostId, PublishContent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for platform adapter calls.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Publishing contract every platform adapter satisfies.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// Publishes content with the given credential.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] whose [`PlatformErrorKind`] tells the
    /// caller whether the failure may be retried.
    async fn publish(
        &self,
        content: &PublishContent,
        credential: &AccountCredential,
    ) -> PlatformResult<ExternalPostId>;
}

/// Closed set of failure kinds reported by platform adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformErrorKind {
    /// The platform rejected the credential.
    AuthInvalid,
    /// The platform throttled the request.
    RateLimited,
    /// The platform refused the content.
    ContentRejected,
    /// Network failure, timeout or server-side error.
    Transient,
    /// Anything the adapter could not classify.
    Unknown,
}

impl PlatformErrorKind {
    /// Returns `true` when a failure of this kind may be retried.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Transient)
    }

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthInvalid => "AuthInvalid",
            Self::RateLimited => "RateLimited",
            Self::ContentRejected => "ContentRejected",
            Self::Transient => "Transient",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlatformErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a platform adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct PlatformError {
    kind: PlatformErrorKind,
    message: String,
}

impl PlatformError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an [`PlatformErrorKind::AuthInvalid`] error.
    #[must_use]
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::AuthInvalid, message)
    }

    /// Creates a [`PlatformErrorKind::RateLimited`] error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::RateLimited, message)
    }

    /// Creates a [`PlatformErrorKind::ContentRejected`] error.
    #[must_use]
    pub fn content_rejected(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::ContentRejected, message)
    }

    /// Creates a [`PlatformErrorKind::Transient`] error.
    #[must_use]
    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::Transient, message)
    }

    /// Creates an [`PlatformErrorKind::Unknown`] error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::Unknown, message)
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> PlatformErrorKind {
        self.kind
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
