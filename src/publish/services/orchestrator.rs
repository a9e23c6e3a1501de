//! Publish orchestration: guard, fan-out, fan-in, aggregate, persist.

use super::dispatch::PlatformUnit;
use crate::account::ports::CredentialStore;
use crate::platform::adapters::PlatformAdapterRegistry;
use crate::publish::domain::{PublishPolicy, aggregate};
use crate::task::{
    domain::{
        AttemptOutcome, FailureKind, InvocationId, PublishAttempt, PublishStatus, PublishSummary,
        Task, TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{Instrument, error, info, info_span, warn};

/// Orchestration-level failures of a publish call.
///
/// Per-platform failures never appear here; they are recorded in the
/// returned [`PublishSummary`].
#[derive(Debug, Error)]
pub enum PublishError {
    /// No task has the identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// Another invocation is already in flight for the task.
    #[error("task {0} is already being published")]
    Conflict(TaskId),

    /// The task targets no platform.
    #[error("task {0} targets no platform")]
    EmptyPlatformSet(TaskId),

    /// The task is published but its last summary could not be rebuilt.
    #[error("task {0} is published but has no recorded invocation")]
    SummaryUnavailable(TaskId),

    /// The task store failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),

    /// The spawned invocation could not be joined.
    #[error("publish invocation for task {task_id} aborted: {source}")]
    Dispatch {
        /// Task identifier.
        task_id: TaskId,
        /// Join failure.
        #[source]
        source: JoinError,
    },
}

impl From<TaskRepositoryError> for PublishError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::TaskNotFound(task_id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for publish orchestration.
pub type PublishResult<T> = Result<T, PublishError>;

/// Delivers tasks to every targeted platform and settles their status.
pub struct PublishOrchestrator<R, S, C>
where
    R: TaskRepository + ?Sized + 'static,
    S: CredentialStore + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    tasks: Arc<R>,
    credentials: Arc<S>,
    adapters: Arc<PlatformAdapterRegistry>,
    policy: PublishPolicy,
    clock: Arc<C>,
}

impl<R, S, C> PublishOrchestrator<R, S, C>
where
    R: TaskRepository + ?Sized + 'static,
    S: CredentialStore + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates an orchestrator with the default [`PublishPolicy`].
    #[must_use]
    pub fn new(
        tasks: Arc<R>,
        credentials: Arc<S>,
        adapters: Arc<PlatformAdapterRegistry>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            credentials,
            adapters,
            policy: PublishPolicy::default(),
            clock,
        }
    }

    /// Replaces the dispatch policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: PublishPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the dispatch policy.
    #[must_use]
    pub const fn policy(&self) -> &PublishPolicy {
        &self.policy
    }

    /// Publishes a task to every platform it targets.
    ///
    /// A task that is already `published` returns its last summary without
    /// dispatching again. The fan-out runs on its own tokio task: dropping the
    /// returned future does not abandon platform calls already in flight, and
    /// their results are still persisted.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::TaskNotFound`] for unknown tasks (including
    /// tasks deleted while the invocation ran), [`PublishError::Conflict`] when
    /// an invocation is already in flight, and [`PublishError::EmptyPlatformSet`]
    /// when the task targets nothing. These checks happen before any dispatch
    /// and leave the task unchanged.
    ///
    /// Returns [`PublishError::Repository`] when the results cannot be written
    /// back. The task is still moved out of `publishing` so it can be
    /// published again.
    pub async fn publish(&self, task_id: TaskId) -> PublishResult<PublishSummary> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(PublishError::TaskNotFound(task_id))?;

        if task.status() == TaskStatus::Published {
            info!(task_id = %task_id, "task already published; returning last summary");
            return self
                .tasks
                .last_summary(task_id)
                .await?
                .ok_or(PublishError::SummaryUnavailable(task_id));
        }
        if !task.status().can_start_publish() {
            return Err(PublishError::Conflict(task_id));
        }
        if task.platforms().is_empty() {
            return Err(PublishError::EmptyPlatformSet(task_id));
        }

        let claimed = self.claim(&task).await?;
        let invocation = Invocation {
            id: InvocationId::new(),
            task: claimed,
            tasks: Arc::clone(&self.tasks),
            credentials: Arc::clone(&self.credentials),
            adapters: Arc::clone(&self.adapters),
            policy: self.policy,
            clock: Arc::clone(&self.clock),
        };
        let span = info_span!(
            "publish_invocation",
            task_id = %task_id,
            invocation_id = %invocation.id
        );
        tokio::spawn(invocation.run().instrument(span))
            .await
            .map_err(|source| PublishError::Dispatch { task_id, source })?
    }

    async fn claim(&self, task: &Task) -> PublishResult<Task> {
        match self
            .tasks
            .compare_and_set_status(task.id(), task.status(), TaskStatus::Publishing)
            .await
        {
            Ok(claimed) => Ok(claimed),
            Err(TaskRepositoryError::StatusMismatch { task_id, .. }) => {
                Err(PublishError::Conflict(task_id))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl<R, S, C> Clone for PublishOrchestrator<R, S, C>
where
    R: TaskRepository + ?Sized + 'static,
    S: CredentialStore + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            credentials: Arc::clone(&self.credentials),
            adapters: Arc::clone(&self.adapters),
            policy: self.policy,
            clock: Arc::clone(&self.clock),
        }
    }
}

/// One claimed publish invocation, owned by its spawned tokio task.
struct Invocation<R, S, C>
where
    R: TaskRepository + ?Sized + 'static,
    S: CredentialStore + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    id: InvocationId,
    task: Task,
    tasks: Arc<R>,
    credentials: Arc<S>,
    adapters: Arc<PlatformAdapterRegistry>,
    policy: PublishPolicy,
    clock: Arc<C>,
}

impl<R, S, C> Invocation<R, S, C>
where
    R: TaskRepository + ?Sized + 'static,
    S: CredentialStore + ?Sized + 'static,
    C: Clock + Send + Sync + 'static,
{
    async fn run(self) -> PublishResult<PublishSummary> {
        let task_id = self.task.id();
        info!(platforms = %self.task.platforms(), "dispatching to platforms");

        let attempts = self.fan_out().await;
        let Some(status) = aggregate(attempts.iter().map(PublishAttempt::outcome)) else {
            return Err(PublishError::EmptyPlatformSet(task_id));
        };

        match self.persist(&attempts, status).await {
            Ok(()) => {}
            Err(WriteBack {
                source: TaskRepositoryError::NotFound(_),
                ..
            }) => {
                warn!("task deleted while publishing; discarding results");
                return Err(PublishError::TaskNotFound(task_id));
            }
            Err(failure) => {
                self.release(&attempts, status, &failure).await;
                return Err(failure.source.into());
            }
        }

        info!(
            status = %status,
            succeeded = attempts.iter().filter(|attempt| attempt.is_success()).count(),
            total = attempts.len(),
            "publish invocation settled"
        );
        Ok(PublishSummary::new(task_id, self.id, status, attempts))
    }

    /// Dispatches every platform and waits for exactly one attempt each.
    async fn fan_out(&self) -> Vec<PublishAttempt> {
        let dispatched_at = self.clock.utc();
        let content = Arc::new(self.task.content().clone());
        let semaphore = Arc::new(Semaphore::new(self.policy.max_concurrency().get()));

        let mut units = JoinSet::new();
        for platform in self.task.platforms() {
            let unit = PlatformUnit {
                platform,
                invocation_id: self.id,
                owner: self.task.owner().clone(),
                content: Arc::clone(&content),
                credentials: Arc::clone(&self.credentials),
                adapter: self.adapters.get(platform),
                policy: self.policy,
                clock: Arc::clone(&self.clock),
                semaphore: Arc::clone(&semaphore),
            };
            units.spawn(unit.run());
        }

        let mut attempts = Vec::with_capacity(self.task.platforms().len());
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(attempt) => attempts.push(attempt),
                Err(err) => warn!(error = %err, "platform unit aborted before reporting"),
            }
        }

        // Units that panicked still owe their platform one failed attempt.
        for platform in self.task.platforms() {
            if !attempts.iter().any(|attempt| attempt.platform() == platform) {
                attempts.push(PublishAttempt::new(
                    self.id,
                    platform,
                    dispatched_at,
                    self.clock.utc(),
                    0,
                    AttemptOutcome::failure(
                        FailureKind::Unknown,
                        "platform dispatch aborted before reporting an outcome",
                    ),
                ));
            }
        }
        attempts.sort_by_key(PublishAttempt::platform);
        attempts
    }

    async fn persist(
        &self,
        attempts: &[PublishAttempt],
        status: PublishStatus,
    ) -> Result<(), WriteBack> {
        let task_id = self.task.id();
        self.tasks
            .append_attempts(task_id, self.id, attempts)
            .await
            .map_err(|source| WriteBack {
                appended: false,
                source,
            })?;
        self.tasks
            .compare_and_set_status(task_id, TaskStatus::Publishing, status.into())
            .await
            .map_err(|source| WriteBack {
                appended: true,
                source,
            })?;
        Ok(())
    }

    /// Settles a task whose write-back failed so later invocations are not
    /// locked out.
    ///
    /// Every attempt is logged first; platforms that accepted the post keep
    /// their external identifiers in the log even when the history write was
    /// lost. Attempts that reached the history settle the task with the
    /// computed status, otherwise it is marked `failed`.
    async fn release(
        &self,
        attempts: &[PublishAttempt],
        status: PublishStatus,
        failure: &WriteBack,
    ) {
        let task_id = self.task.id();
        for attempt in attempts {
            match attempt.outcome() {
                AttemptOutcome::Success { external_post_id } => error!(
                    platform = %attempt.platform(),
                    external_post_id = %external_post_id,
                    tries = attempt.tries(),
                    "publish attempt succeeded before write-back failed"
                ),
                AttemptOutcome::Failure { error_kind, detail } => error!(
                    platform = %attempt.platform(),
                    error_kind = %error_kind,
                    detail = %detail,
                    tries = attempt.tries(),
                    "publish attempt failed before write-back failed"
                ),
            }
        }

        let settled = if failure.appended {
            TaskStatus::from(status)
        } else {
            TaskStatus::Failed
        };
        match self
            .tasks
            .compare_and_set_status(task_id, TaskStatus::Publishing, settled)
            .await
        {
            Ok(_) => warn!(
                status = %settled,
                error = %failure.source,
                "publish write-back failed; task released"
            ),
            Err(err) => error!(
                error = %err,
                write_back_error = %failure.source,
                "publish write-back failed and task could not be released"
            ),
        }
    }
}

/// A failed write-back and how far it got.
struct WriteBack {
    appended: bool,
    source: TaskRepositoryError,
}
