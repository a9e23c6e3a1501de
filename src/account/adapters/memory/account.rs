//! In-memory account repository and credential store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{AccountCredential, AccountId, ConnectedAccount, UserId},
    ports::{
        AccountRepository, AccountRepositoryError, AccountRepositoryResult, CredentialStore,
        CredentialStoreError, CredentialStoreResult,
    },
};
use crate::platform::domain::Platform;

/// Thread-safe in-memory account repository.
///
/// Also serves as the [`CredentialStore`] so that accounts connected through
/// the registry are immediately usable for publishing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, ConnectedAccount>,
    connection_order: Vec<AccountId>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn store(&self, account: &ConnectedAccount) -> AccountRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AccountRepositoryError::persistence(lock_error(err)))?;
        if state.accounts.contains_key(&account.id()) {
            return Err(AccountRepositoryError::DuplicateAccount(account.id()));
        }
        state.connection_order.push(account.id());
        state.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<ConnectedAccount>> {
        let state = self
            .state
            .read()
            .map_err(|err| AccountRepositoryError::persistence(lock_error(err)))?;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> AccountRepositoryResult<Vec<ConnectedAccount>> {
        let state = self
            .state
            .read()
            .map_err(|err| AccountRepositoryError::persistence(lock_error(err)))?;
        Ok(state
            .connection_order
            .iter()
            .filter_map(|id| state.accounts.get(id))
            .filter(|account| account.owner() == owner)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AccountRepositoryError::persistence(lock_error(err)))?;
        if state.accounts.remove(&id).is_none() {
            return Err(AccountRepositoryError::NotFound(id));
        }
        state.connection_order.retain(|existing| *existing != id);
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for InMemoryAccountRepository {
    async fn resolve(
        &self,
        owner: &UserId,
        platform: Platform,
    ) -> CredentialStoreResult<Option<AccountCredential>> {
        let state = self
            .state
            .read()
            .map_err(|err| CredentialStoreError::lookup(lock_error(err)))?;
        // Most recently connected account wins.
        Ok(state
            .connection_order
            .iter()
            .rev()
            .filter_map(|id| state.accounts.get(id))
            .find(|account| account.owner() == owner && account.platform() == platform)
            .map(|account| account.credential().clone()))
    }
}
