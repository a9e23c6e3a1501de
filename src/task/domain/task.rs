//! Task aggregate root.

use super::{
    InvocationId, PublishAttempt, PublishSummary, TaskDomainError, TaskId, TaskStatus,
};
use crate::account::domain::UserId;
use crate::platform::domain::{PlatformSet, PublishContent};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// One piece of content, the platforms it targets, and its publish history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    content: PublishContent,
    platforms: PlatformSet,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    attempts: Vec<PublishAttempt>,
    last_invocation: Option<InvocationId>,
}

impl Task {
    /// Creates a draft task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        owner: UserId,
        content: PublishContent,
        platforms: PlatformSet,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = content.title().trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let media_url = content
            .media_url()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_owned);
        let normalized = PublishContent::new(title, content.body(), media_url);

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            owner,
            content: normalized,
            platforms,
            status: TaskStatus::Draft,
            created_at: timestamp,
            updated_at: timestamp,
            attempts: Vec::new(),
            last_invocation: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the content payload.
    #[must_use]
    pub const fn content(&self) -> &PublishContent {
        &self.content
    }

    /// Returns the targeted platforms.
    #[must_use]
    pub const fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the full attempt history, oldest first.
    #[must_use]
    pub fn attempts(&self) -> &[PublishAttempt] {
        &self.attempts
    }

    /// Returns the most recent invocation, if the task was ever published.
    #[must_use]
    pub const fn last_invocation(&self) -> Option<InvocationId> {
        self.last_invocation
    }

    /// Returns the attempts of the most recent invocation.
    pub fn latest_attempts(&self) -> impl Iterator<Item = &PublishAttempt> + '_ {
        let latest = self.last_invocation;
        self.attempts
            .iter()
            .filter(move |attempt| Some(attempt.invocation_id()) == latest)
    }

    /// Moves the task to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the lifecycle
    /// does not permit the move; the task is left unchanged.
    pub fn transition_to(
        &mut self,
        next: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(next) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.touch(clock);
        Ok(())
    }

    /// Appends the attempts of an invocation and marks it as the latest.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ForeignAttempt`] when any attempt names a
    /// different invocation; nothing is appended in that case.
    pub fn record_invocation(
        &mut self,
        invocation_id: InvocationId,
        attempts: &[PublishAttempt],
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(foreign) = attempts
            .iter()
            .find(|attempt| attempt.invocation_id() != invocation_id)
        {
            return Err(TaskDomainError::ForeignAttempt {
                expected: invocation_id,
                found: foreign.invocation_id(),
            });
        }
        self.attempts.extend_from_slice(attempts);
        self.last_invocation = Some(invocation_id);
        self.touch(clock);
        Ok(())
    }

    /// Rebuilds the summary of the most recent invocation.
    ///
    /// Returns `None` unless the task has settled into a terminal publish
    /// status after at least one invocation.
    #[must_use]
    pub fn last_summary(&self) -> Option<PublishSummary> {
        let status = self.status.publish_outcome()?;
        let invocation_id = self.last_invocation?;
        Some(PublishSummary::new(
            self.id,
            invocation_id,
            status,
            self.latest_attempts().cloned().collect(),
        ))
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
