//! Repository port for connected-account persistence.

use crate::account::domain::{AccountId, ConnectedAccount, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Connected-account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new connected account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateAccount`] when the account
    /// identifier already exists.
    async fn store(&self, account: &ConnectedAccount) -> AccountRepositoryResult<()>;

    /// Finds an account by identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<ConnectedAccount>>;

    /// Returns all accounts owned by the user, oldest first.
    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> AccountRepositoryResult<Vec<ConnectedAccount>>;

    /// Removes an account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn delete(&self, id: AccountId) -> AccountRepositoryResult<()>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate account identifier: {0}")]
    DuplicateAccount(AccountId),

    /// The account was not found.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
