//! Shared world state for publish workflow BDD scenarios.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crosspost::account::{
    adapters::memory::InMemoryAccountRepository, services::AccountRegistryService,
};
use crosspost::platform::{
    adapters::{PlatformAdapterRegistry, ScriptedPlatformAdapter},
    domain::Platform,
};
use crosspost::publish::{
    domain::PublishPolicy,
    services::{PublishError, PublishOrchestrator},
};
use crosspost::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PublishSummary, TaskId},
    services::TaskLifecycleService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Orchestrator type used by the BDD world.
pub type TestOrchestrator =
    PublishOrchestrator<InMemoryTaskRepository, InMemoryAccountRepository, DefaultClock>;

/// Scenario world for publish workflow behaviour tests.
pub struct PublishWorld {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub task_service: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
    pub account_service: AccountRegistryService<InMemoryAccountRepository, DefaultClock>,
    pub adapters: BTreeMap<Platform, ScriptedPlatformAdapter>,
    pub task_id: Option<TaskId>,
    pub results: Vec<Result<PublishSummary, PublishError>>,
}

impl PublishWorld {
    /// Creates a world with empty stores and no adapters.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            task_service: TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&clock)),
            account_service: AccountRegistryService::new(Arc::clone(&accounts), clock),
            tasks,
            accounts,
            adapters: BTreeMap::new(),
            task_id: None,
            results: Vec::new(),
        }
    }

    /// Builds an orchestrator over the adapters scripted so far.
    #[must_use]
    pub fn orchestrator(&self) -> TestOrchestrator {
        let registry = self
            .adapters
            .iter()
            .fold(PlatformAdapterRegistry::new(), |registry, (platform, adapter)| {
                registry.with_adapter(*platform, Arc::new(adapter.clone()))
            });
        PublishOrchestrator::new(
            Arc::clone(&self.tasks),
            Arc::clone(&self.accounts),
            Arc::new(registry),
            Arc::new(DefaultClock),
        )
        .with_policy(
            PublishPolicy::default()
                .with_attempt_timeout(Duration::from_millis(500))
                .with_retry_backoff(Duration::from_millis(1), Duration::from_millis(4)),
        )
    }

    /// Returns the most recent publish result.
    pub fn last_result(&self) -> eyre::Result<&Result<PublishSummary, PublishError>> {
        self.results
            .last()
            .ok_or_else(|| eyre::eyre!("no publish result recorded"))
    }

    /// Returns the most recent successful publish summary.
    pub fn last_summary(&self) -> eyre::Result<&PublishSummary> {
        match self.last_result()? {
            Ok(summary) => Ok(summary),
            Err(err) => Err(eyre::eyre!("publish failed: {err}")),
        }
    }
}

impl Default for PublishWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PublishWorld {
    PublishWorld::default()
}

/// Parses a platform named in a step.
pub fn platform(name: &str) -> eyre::Result<Platform> {
    Platform::try_from(name).map_err(|err| eyre::eyre!("invalid platform in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
