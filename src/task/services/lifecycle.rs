//! Service layer for authoring, listing and deleting publish tasks.

use crate::account::domain::UserId;
use crate::platform::domain::{PlatformSet, PublishContent};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a draft task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner: UserId,
    title: String,
    content: String,
    media_url: Option<String>,
    platforms: String,
}

impl CreateTaskRequest {
    /// Creates a request.
    ///
    /// `platforms` is the comma-joined boundary representation, for example
    /// `"tiktok,bilibili"`.
    #[must_use]
    pub fn new(
        owner: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        platforms: impl Into<String>,
    ) -> Self {
        Self {
            owner,
            title: title.into(),
            content: content.into(),
            media_url: None,
            platforms: platforms.into(),
        }
    }

    /// Sets the media URL.
    #[must_use]
    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task authoring service.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a draft task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank or the
    /// platform list is invalid, and [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            owner,
            title,
            content,
            media_url,
            platforms,
        } = request;
        let platform_set = PlatformSet::parse(&platforms).map_err(TaskDomainError::from)?;
        let task = Task::new(
            owner,
            PublishContent::new(title, content, media_url),
            platform_set,
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        tracing::info!(
            task_id = %task.id(),
            platforms = %task.platforms(),
            "created draft task"
        );
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists a user's tasks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_for_owner(&self, owner: &UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_for_owner(owner).await?)
    }

    /// Deletes a task.
    ///
    /// A publish invocation already in flight for the task still runs to
    /// completion; its results are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}
