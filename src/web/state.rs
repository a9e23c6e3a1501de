//! Shared state handed to every handler.

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    ports::{AccountRepository, CredentialStore},
    services::AccountRegistryService,
};
use crate::content::{
    adapters::TemplateContentGenerator, ports::ContentGenerator, services::ContentAssistService,
};
use crate::platform::adapters::PlatformAdapterRegistry;
use crate::publish::{domain::PublishPolicy, services::PublishOrchestrator};
use crate::task::{
    adapters::memory::InMemoryTaskRepository, ports::TaskRepository,
    services::TaskLifecycleService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task authoring service behind the API.
pub type TaskService = TaskLifecycleService<dyn TaskRepository, DefaultClock>;
/// Account registry service behind the API.
pub type AccountService = AccountRegistryService<dyn AccountRepository, DefaultClock>;
/// Publish orchestrator behind the API.
pub type Publisher = PublishOrchestrator<dyn TaskRepository, dyn CredentialStore, DefaultClock>;
/// Content assistant behind the API.
pub type ContentAssistant = ContentAssistService<dyn ContentGenerator>;

/// Services reachable from request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Task authoring.
    pub tasks: TaskService,
    /// Connected accounts.
    pub accounts: AccountService,
    /// Publish orchestration.
    pub publisher: Publisher,
    /// AI drafting.
    pub assistant: ContentAssistant,
}

impl AppState {
    /// Wires the services over in-memory stores and the template generator.
    #[must_use]
    pub fn in_memory(adapters: PlatformAdapterRegistry, policy: PublishPolicy) -> Self {
        let clock = Arc::new(DefaultClock);
        let task_store: Arc<dyn TaskRepository> = Arc::new(InMemoryTaskRepository::new());
        let account_store = Arc::new(InMemoryAccountRepository::new());
        let account_repository: Arc<dyn AccountRepository> = Arc::clone(&account_store) as _;
        let credentials: Arc<dyn CredentialStore> = account_store;
        let generator: Arc<dyn ContentGenerator> = Arc::new(TemplateContentGenerator::new());

        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&task_store), Arc::clone(&clock)),
            accounts: AccountRegistryService::new(account_repository, Arc::clone(&clock)),
            publisher: PublishOrchestrator::new(task_store, credentials, Arc::new(adapters), clock)
                .with_policy(policy),
            assistant: ContentAssistService::new(generator),
        }
    }
}
