//! Result of one publish invocation as returned to callers.

use super::{InvocationId, PublishAttempt, PublishStatus, TaskId};
use crate::platform::domain::Platform;
use serde::{Deserialize, Serialize};

/// Aggregate status and per-platform results of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishSummary {
    task_id: TaskId,
    invocation_id: InvocationId,
    status: PublishStatus,
    results: Vec<PublishAttempt>,
}

impl PublishSummary {
    /// Creates a summary; results are ordered by platform.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        invocation_id: InvocationId,
        status: PublishStatus,
        mut results: Vec<PublishAttempt>,
    ) -> Self {
        results.sort_by_key(PublishAttempt::platform);
        Self {
            task_id,
            invocation_id,
            status,
            results,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the invocation identifier.
    #[must_use]
    pub const fn invocation_id(&self) -> InvocationId {
        self.invocation_id
    }

    /// Returns the aggregate status.
    #[must_use]
    pub const fn status(&self) -> PublishStatus {
        self.status
    }

    /// Returns per-platform results in platform order.
    #[must_use]
    pub fn results(&self) -> &[PublishAttempt] {
        &self.results
    }

    /// Returns the result recorded for a platform.
    #[must_use]
    pub fn result_for(&self, platform: Platform) -> Option<&PublishAttempt> {
        self.results
            .iter()
            .find(|attempt| attempt.platform() == platform)
    }
}
