//! Repository port for task persistence and the publish-status guard.

use crate::account::domain::UserId;
use crate::task::domain::{
    InvocationId, PublishAttempt, PublishSummary, Task, TaskDomainError, TaskId, TaskStatus,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutation the publish orchestrator performs goes through
/// [`TaskRepository::compare_and_set_status`] and
/// [`TaskRepository::append_attempts`]; implementations must apply each of
/// them atomically with respect to concurrent callers.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks owned by the user, newest first.
    async fn list_for_owner(&self, owner: &UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Atomically moves the task from `expected` to `next`.
    ///
    /// Returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist,
    /// [`TaskRepositoryError::StatusMismatch`] when the current status is not
    /// `expected`, and [`TaskRepositoryError::Domain`] when the lifecycle
    /// forbids the transition. The task is unchanged on error.
    async fn compare_and_set_status(
        &self,
        id: TaskId,
        expected: TaskStatus,
        next: TaskStatus,
    ) -> TaskRepositoryResult<Task>;

    /// Appends the attempts of an invocation to the task history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// and [`TaskRepositoryError::Domain`] when an attempt names another
    /// invocation.
    async fn append_attempts(
        &self,
        id: TaskId,
        invocation_id: InvocationId,
        attempts: &[PublishAttempt],
    ) -> TaskRepositoryResult<()>;

    /// Returns the summary of the task's most recent settled invocation.
    ///
    /// Returns `None` when the task has never settled.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn last_summary(&self, id: TaskId) -> TaskRepositoryResult<Option<PublishSummary>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task's status differed from the expected status.
    #[error("task {task_id} is {actual}, expected {expected}")]
    StatusMismatch {
        /// Task identifier.
        task_id: TaskId,
        /// Status the caller expected.
        expected: TaskStatus,
        /// Status actually stored.
        actual: TaskStatus,
    },

    /// The mutation violated a domain rule.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
