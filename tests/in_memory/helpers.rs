//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use crosspost::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::UserId,
    services::{AccountRegistryService, ConnectAccountRequest},
};
use crosspost::platform::adapters::PlatformAdapterRegistry;
use crosspost::publish::services::PublishOrchestrator;
use crosspost::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CreateTaskRequest, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Services wired over shared in-memory stores and simulated platforms.
pub struct Stack {
    pub tasks: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    pub accounts: AccountRegistryService<InMemoryAccountRepository, DefaultClock>,
    pub publisher:
        PublishOrchestrator<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>,
}

impl Stack {
    /// Connects a publishable account for `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is rejected.
    pub async fn connect(&self, owner: &UserId, platform: &str) -> eyre::Result<()> {
        let request =
            ConnectAccountRequest::new(owner.clone(), platform, format!("{owner}-{platform}"))
                .with_external_account_id(format!("{platform}-{owner}"));
        self.accounts.connect(request).await?;
        Ok(())
    }

    /// Creates a draft task with a media attachment.
    ///
    /// # Errors
    ///
    /// Returns an error if the task is rejected.
    pub async fn draft(&self, owner: &UserId, title: &str, platforms: &str) -> eyre::Result<Task> {
        let request =
            CreateTaskRequest::new(owner.clone(), title, "Fresh beans, slow pour.", platforms)
                .with_media_url("https://cdn.example/pour.mp4");
        Ok(self.tasks.create(request).await?)
    }
}

/// Provides a fresh stack for each test.
#[fixture]
pub fn stack() -> Stack {
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let account_store = Arc::new(InMemoryAccountRepository::new());
    let clock = Arc::new(DefaultClock);

    Stack {
        tasks: TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&clock)),
        accounts: AccountRegistryService::new(Arc::clone(&account_store), Arc::clone(&clock)),
        publisher: PublishOrchestrator::new(
            task_store,
            account_store,
            Arc::new(PlatformAdapterRegistry::simulated()),
            clock,
        ),
    }
}

/// Provides the acting user.
#[fixture]
pub fn alice() -> UserId {
    UserId::new("alice").expect("valid user id")
}
