//! Connected account aggregate.

use super::{AccountCredential, AccountDomainError, AccountId, SecretToken, UserId};
use crate::platform::domain::Platform;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Third-party platform account connected by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedAccount {
    id: AccountId,
    owner: UserId,
    platform: Platform,
    username: String,
    external_account_id: Option<String>,
    avatar: Option<String>,
    credential: AccountCredential,
    created_at: DateTime<Utc>,
}

/// Parameter object describing a new connected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Owning user.
    pub owner: UserId,
    /// Platform the account belongs to.
    pub platform: Platform,
    /// Display username on the platform.
    pub username: String,
    /// Platform-side account identifier, used as the publishing credential.
    pub external_account_id: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
}

impl ConnectedAccount {
    /// Creates a connected account.
    ///
    /// An account without an external account identifier is stored with an
    /// invalid credential; it is listed but cannot be published through.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyUsername`] when the username is
    /// blank.
    pub fn connect(account: NewAccount, clock: &impl Clock) -> Result<Self, AccountDomainError> {
        let username = account.username.trim();
        if username.is_empty() {
            return Err(AccountDomainError::EmptyUsername);
        }

        let external_account_id = account
            .external_account_id
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let credential = match &external_account_id {
            Some(value) => AccountCredential::valid(SecretToken::new(value.clone())),
            None => AccountCredential::invalid(SecretToken::new(String::new())),
        };
        let avatar = account
            .avatar
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self {
            id: AccountId::new(),
            owner: account.owner,
            platform: account.platform,
            username: username.to_owned(),
            external_account_id,
            avatar,
            credential,
            created_at: clock.utc(),
        })
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the account platform.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the platform username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the platform-side account identifier, if known.
    #[must_use]
    pub fn external_account_id(&self) -> Option<&str> {
        self.external_account_id.as_deref()
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns the publishing credential.
    #[must_use]
    pub const fn credential(&self) -> &AccountCredential {
        &self.credential
    }

    /// Returns the connection timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
