//! Credential resolution is scoped to the task owner.

use super::helpers::{Stack, alice, stack};
use crosspost::account::domain::UserId;
use crosspost::platform::domain::Platform;
use crosspost::task::domain::{FailureKind, PublishStatus};
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn another_users_account_is_not_used(stack: Stack, alice: UserId) -> eyre::Result<()> {
    let bob = UserId::new("bob")?;
    stack.connect(&bob, "zhihu").await?;
    let task = stack.draft(&alice, "Espresso ratios", "zhihu").await?;

    let summary = stack.publisher.publish(task.id()).await?;

    ensure!(summary.status() == PublishStatus::Failed);
    let Some(zhihu) = summary.result_for(Platform::Zhihu) else {
        bail!("missing zhihu result");
    };
    ensure!(zhihu.outcome().error_kind() == Some(FailureKind::MissingCredential));
    ensure!(zhihu.tries() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disconnecting_the_only_account_blocks_publishing(
    stack: Stack,
    alice: UserId,
) -> eyre::Result<()> {
    stack.connect(&alice, "toutiao").await?;
    let accounts = stack.accounts.list_for_owner(&alice).await?;
    let Some(account) = accounts.first() else {
        bail!("account should be listed");
    };
    stack.accounts.disconnect(account.id()).await?;
    let task = stack.draft(&alice, "Decaf done right", "toutiao").await?;

    let summary = stack.publisher.publish(task.id()).await?;

    ensure!(summary.status() == PublishStatus::Failed);
    Ok(())
}
