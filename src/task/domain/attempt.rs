//! Per-platform publish attempts recorded by each invocation.

use super::InvocationId;
use crate::platform::{
    domain::{ExternalPostId, Platform},
    ports::PlatformErrorKind,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a platform attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// No usable credential was stored for the platform; the adapter was not
    /// contacted.
    MissingCredential,
    /// The platform rejected the credential.
    AuthInvalid,
    /// The platform throttled the request.
    RateLimited,
    /// The platform refused the content.
    ContentRejected,
    /// Network failures or timeouts outlasted the retry budget.
    Transient,
    /// Unclassified failure.
    Unknown,
}

impl FailureKind {
    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingCredential => "MissingCredential",
            Self::AuthInvalid => "AuthInvalid",
            Self::RateLimited => "RateLimited",
            Self::ContentRejected => "ContentRejected",
            Self::Transient => "Transient",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<PlatformErrorKind> for FailureKind {
    fn from(kind: PlatformErrorKind) -> Self {
        match kind {
            PlatformErrorKind::AuthInvalid => Self::AuthInvalid,
            PlatformErrorKind::RateLimited => Self::RateLimited,
            PlatformErrorKind::ContentRejected => Self::ContentRejected,
            PlatformErrorKind::Transient => Self::Transient,
            PlatformErrorKind::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one platform within one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The platform accepted the post.
    Success {
        /// Identifier assigned by the platform.
        external_post_id: ExternalPostId,
    },
    /// The platform did not accept the post.
    Failure {
        /// Failure classification.
        error_kind: FailureKind,
        /// Diagnostic message from the adapter or orchestrator.
        detail: String,
    },
}

impl AttemptOutcome {
    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(error_kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::Failure {
            error_kind,
            detail: detail.into(),
        }
    }

    /// Returns `true` for successful outcomes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the external post identifier of a success.
    #[must_use]
    pub const fn external_post_id(&self) -> Option<&ExternalPostId> {
        match self {
            Self::Success { external_post_id } => Some(external_post_id),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure kind of a failure.
    #[must_use]
    pub const fn error_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_kind, .. } => Some(*error_kind),
        }
    }
}

/// Record of delivering a task to one platform during one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishAttempt {
    invocation_id: InvocationId,
    platform: Platform,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    tries: u32,
    outcome: AttemptOutcome,
}

impl PublishAttempt {
    /// Creates an attempt record.
    ///
    /// `tries` counts adapter calls; it is zero when the adapter was never
    /// contacted.
    #[must_use]
    pub const fn new(
        invocation_id: InvocationId,
        platform: Platform,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        tries: u32,
        outcome: AttemptOutcome,
    ) -> Self {
        Self {
            invocation_id,
            platform,
            started_at,
            finished_at,
            tries,
            outcome,
        }
    }

    /// Returns the invocation this attempt belongs to.
    #[must_use]
    pub const fn invocation_id(&self) -> InvocationId {
        self.invocation_id
    }

    /// Returns the targeted platform.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns when dispatch to the platform started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the platform reached its terminal outcome.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Returns the number of adapter calls made.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the terminal outcome.
    #[must_use]
    pub const fn outcome(&self) -> &AttemptOutcome {
        &self.outcome
    }

    /// Returns `true` when the platform accepted the post.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
