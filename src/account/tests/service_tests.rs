//! Service and credential lookup tests for the account registry.

use std::sync::Arc;

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::{AccountId, UserId},
    ports::{AccountRepositoryError, CredentialStore},
    services::{AccountRegistryError, AccountRegistryService, ConnectAccountRequest},
};
use crate::platform::domain::{Platform, PlatformDomainError};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = AccountRegistryService<InMemoryAccountRepository, DefaultClock>;

struct Registry {
    service: TestService,
    store: Arc<InMemoryAccountRepository>,
}

#[fixture]
fn registry() -> Registry {
    let store = Arc::new(InMemoryAccountRepository::new());
    Registry {
        service: AccountRegistryService::new(Arc::clone(&store), Arc::new(DefaultClock)),
        store,
    }
}

fn alice() -> UserId {
    UserId::new("alice").expect("valid user id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connected_accounts_are_listed_oldest_first(registry: Registry) -> eyre::Result<()> {
    let first = registry
        .service
        .connect(
            ConnectAccountRequest::new(alice(), "tiktok", "alice_tt")
                .with_external_account_id("tt-1"),
        )
        .await?;
    let second = registry
        .service
        .connect(
            ConnectAccountRequest::new(alice(), "Bilibili", "alice_bili")
                .with_external_account_id("bili-1")
                .with_avatar("https://cdn/avatar.png"),
        )
        .await?;
    registry
        .service
        .connect(ConnectAccountRequest::new(UserId::default_user(), "zhihu", "someone"))
        .await?;

    let listed = registry.service.list_for_owner(&alice()).await?;

    ensure!(listed == vec![first, second.clone()]);
    ensure!(second.platform() == Platform::Bilibili);
    ensure!(second.avatar() == Some("https://cdn/avatar.png"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connect_rejects_unknown_platform(registry: Registry) {
    let result = registry
        .service
        .connect(ConnectAccountRequest::new(alice(), "myspace", "tom"))
        .await;

    assert!(matches!(
        result,
        Err(AccountRegistryError::Platform(PlatformDomainError::UnknownPlatform(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disconnect_unknown_account_is_not_found(registry: Registry) {
    let missing = AccountId::new();

    let result = registry.service.disconnect(missing).await;

    assert!(matches!(
        result,
        Err(AccountRegistryError::Repository(AccountRepositoryError::NotFound(id))) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn most_recent_account_supplies_the_credential(registry: Registry) -> eyre::Result<()> {
    registry
        .service
        .connect(
            ConnectAccountRequest::new(alice(), "kuaishou", "old")
                .with_external_account_id("ks-old"),
        )
        .await?;
    let newest = registry
        .service
        .connect(
            ConnectAccountRequest::new(alice(), "kuaishou", "new")
                .with_external_account_id("ks-new"),
        )
        .await?;

    let resolved = registry.store.resolve(&alice(), Platform::Kuaishou).await?;
    ensure!(resolved.as_ref() == Some(newest.credential()));

    registry.service.disconnect(newest.id()).await?;
    let fallback = registry.store.resolve(&alice(), Platform::Kuaishou).await?;
    ensure!(fallback.is_some_and(|credential| credential.token().expose() == "ks-old"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn credentials_are_scoped_to_their_owner(registry: Registry) -> eyre::Result<()> {
    registry
        .service
        .connect(
            ConnectAccountRequest::new(alice(), "toutiao", "alice_tout")
                .with_external_account_id("t-1"),
        )
        .await?;
    let mallory = UserId::new("mallory")?;

    ensure!(registry.store.resolve(&mallory, Platform::Toutiao).await?.is_none());
    ensure!(registry.store.resolve(&alice(), Platform::Zhihu).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_returns_connected_account_until_disconnected(registry: Registry) -> eyre::Result<()> {
    let account = registry
        .service
        .connect(ConnectAccountRequest::new(alice(), "toutiao", "alice_tout"))
        .await?;

    let found = registry.service.find(account.id()).await?;
    registry.service.disconnect(account.id()).await?;
    let after = registry.service.find(account.id()).await?;

    ensure!(found.as_ref() == Some(&account));
    ensure!(!account.credential().is_valid());
    ensure!(after.is_none());
    Ok(())
}
