//! In-memory task repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::UserId;
use crate::task::{
    domain::{InvocationId, PublishAttempt, PublishSummary, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// A single `RwLock` guards all records, so each compare-and-set and append
/// is atomic with respect to concurrent callers.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty in-memory repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory repository stamping updates with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_for_owner(&self, owner: &UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner() == owner)
            .cloned()
            .collect();
        tasks.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| left.id().into_inner().cmp(&right.id().into_inner()))
        });
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn compare_and_set_status(
        &self,
        id: TaskId,
        expected: TaskStatus,
        next: TaskStatus,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        if task.status() != expected {
            return Err(TaskRepositoryError::StatusMismatch {
                task_id: id,
                expected,
                actual: task.status(),
            });
        }
        task.transition_to(next, &*self.clock)?;
        Ok(task.clone())
    }

    async fn append_attempts(
        &self,
        id: TaskId,
        invocation_id: InvocationId,
        attempts: &[PublishAttempt],
    ) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.record_invocation(invocation_id, attempts, &*self.clock)?;
        Ok(())
    }

    async fn last_summary(&self, id: TaskId) -> TaskRepositoryResult<Option<PublishSummary>> {
        let state = self.state.read().map_err(lock_error)?;
        let task = state
            .tasks
            .get(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(task.last_summary())
    }
}
