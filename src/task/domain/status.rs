//! Task lifecycle status and the aggregate publish status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been authored but never published.
    Draft,
    /// A publish invocation is in flight.
    Publishing,
    /// Every platform of the latest invocation succeeded.
    Published,
    /// Some but not all platforms of the latest invocation succeeded.
    PartialSuccess,
    /// Every platform of the latest invocation failed.
    Failed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Publishing => "publishing",
            Self::Published => "published",
            Self::PartialSuccess => "partial_success",
            Self::Failed => "failed",
        }
    }

    /// Returns `true` when the lifecycle permits moving to `next`.
    ///
    /// `draft`, `failed` and `partial_success` may enter `publishing`;
    /// `publishing` may only settle into one of the three outcomes.
    /// `published` admits no further transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft | Self::Failed | Self::PartialSuccess, Self::Publishing)
                | (
                    Self::Publishing,
                    Self::Published | Self::PartialSuccess | Self::Failed
                )
        )
    }

    /// Returns `true` when a new publish invocation may start from this status.
    #[must_use]
    pub const fn can_start_publish(self) -> bool {
        self.can_transition_to(Self::Publishing)
    }

    /// Returns the aggregate outcome this status records, if any.
    #[must_use]
    pub const fn publish_outcome(self) -> Option<PublishStatus> {
        match self {
            Self::Published => Some(PublishStatus::Published),
            Self::PartialSuccess => Some(PublishStatus::PartialSuccess),
            Self::Failed => Some(PublishStatus::Failed),
            Self::Draft | Self::Publishing => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "publishing" => Ok(Self::Publishing),
            "published" => Ok(Self::Published),
            "partial_success" => Ok(Self::PartialSuccess),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one publish invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    /// All platforms succeeded.
    Published,
    /// At least one platform succeeded and at least one failed.
    PartialSuccess,
    /// All platforms failed.
    Failed,
}

impl PublishStatus {
    /// Returns the canonical representation shared with [`TaskStatus`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        TaskStatus::from_publish_status(self).as_str()
    }
}

impl TaskStatus {
    const fn from_publish_status(status: PublishStatus) -> Self {
        match status {
            PublishStatus::Published => Self::Published,
            PublishStatus::PartialSuccess => Self::PartialSuccess,
            PublishStatus::Failed => Self::Failed,
        }
    }
}

impl From<PublishStatus> for TaskStatus {
    fn from(status: PublishStatus) -> Self {
        Self::from_publish_status(status)
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
