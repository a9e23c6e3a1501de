//! Service layer for connecting, listing and disconnecting platform accounts.

use crate::account::{
    domain::{AccountDomainError, AccountId, ConnectedAccount, NewAccount, UserId},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::platform::domain::{Platform, PlatformDomainError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for connecting a platform account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectAccountRequest {
    owner: UserId,
    platform: String,
    username: String,
    external_account_id: Option<String>,
    avatar: Option<String>,
}

impl ConnectAccountRequest {
    /// Creates a request with the required account fields.
    #[must_use]
    pub fn new(owner: UserId, platform: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            owner,
            platform: platform.into(),
            username: username.into(),
            external_account_id: None,
            avatar: None,
        }
    }

    /// Sets the platform-side account identifier.
    #[must_use]
    pub fn with_external_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.external_account_id = Some(account_id.into());
        self
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Service-level errors for account registry operations.
#[derive(Debug, Error)]
pub enum AccountRegistryError {
    /// Account validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// The platform identifier was invalid.
    #[error(transparent)]
    Platform(#[from] PlatformDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),
}

/// Result type for account registry service operations.
pub type AccountRegistryResult<T> = Result<T, AccountRegistryError>;

/// Connected-account orchestration service.
pub struct AccountRegistryService<R, C>
where
    R: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AccountRegistryService<R, C>
where
    R: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new account registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Connects a new platform account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRegistryError`] when the platform or username is
    /// invalid or the repository rejects persistence.
    pub async fn connect(
        &self,
        request: ConnectAccountRequest,
    ) -> AccountRegistryResult<ConnectedAccount> {
        let ConnectAccountRequest {
            owner,
            platform,
            username,
            external_account_id,
            avatar,
        } = request;
        let account = ConnectedAccount::connect(
            NewAccount {
                owner,
                platform: Platform::try_from(platform.as_str())?,
                username,
                external_account_id,
                avatar,
            },
            &*self.clock,
        )?;
        self.repository.store(&account).await?;
        tracing::info!(
            account_id = %account.id(),
            platform = %account.platform(),
            owner = %account.owner(),
            publishable = account.credential().is_valid(),
            "connected platform account"
        );
        Ok(account)
    }

    /// Lists the accounts connected by a user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRegistryError::Repository`] when the lookup fails.
    pub async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> AccountRegistryResult<Vec<ConnectedAccount>> {
        Ok(self.repository.list_for_owner(owner).await?)
    }

    /// Retrieves an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRegistryError::Repository`] when the lookup fails.
    pub async fn find(&self, id: AccountId) -> AccountRegistryResult<Option<ConnectedAccount>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Disconnects an account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRegistryError::Repository`] wrapping
    /// [`AccountRepositoryError::NotFound`] when the account does not exist.
    pub async fn disconnect(&self, id: AccountId) -> AccountRegistryResult<()> {
        self.repository.delete(id).await?;
        tracing::info!(account_id = %id, "disconnected platform account");
        Ok(())
    }
}

impl<R, C> Clone for AccountRegistryService<R, C>
where
    R: AccountRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}
