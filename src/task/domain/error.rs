//! Error types for task domain validation and parsing.

use super::{InvocationId, TaskId, TaskStatus};
use crate::platform::domain::PlatformDomainError;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The platform selection is invalid.
    #[error(transparent)]
    Platform(#[from] PlatformDomainError),

    /// The requested status transition is not permitted by the lifecycle.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// An attempt being recorded belongs to a different invocation.
    #[error("attempt from invocation {found} recorded under invocation {expected}")]
    ForeignAttempt {
        /// Invocation the batch is recorded under.
        expected: InvocationId,
        /// Invocation named by the offending attempt.
        found: InvocationId,
    },
}

/// Error returned while parsing task statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
