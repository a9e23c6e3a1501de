//! Publishing through the simulated platform adapters.

use super::helpers::{Stack, alice, stack};
use crosspost::account::domain::UserId;
use crosspost::platform::domain::Platform;
use crosspost::task::domain::{FailureKind, PublishAttempt, PublishStatus, TaskStatus};
use eyre::{bail, ensure};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn simulated_platforms_accept_valid_content(stack: Stack, alice: UserId) -> eyre::Result<()> {
    for platform in ["tiktok", "bilibili", "zhihu"] {
        stack.connect(&alice, platform).await?;
    }
    let task = stack.draft(&alice, "Pour-over basics", "zhihu,tiktok,bilibili").await?;

    let summary = stack.publisher.publish(task.id()).await?;

    ensure!(summary.status() == PublishStatus::Published);
    let platforms: Vec<Platform> = summary
        .results()
        .iter()
        .map(PublishAttempt::platform)
        .collect();
    ensure!(platforms == vec![Platform::Tiktok, Platform::Bilibili, Platform::Zhihu]);
    let Some(bilibili) = summary.result_for(Platform::Bilibili) else {
        bail!("missing bilibili result");
    };
    let Some(post) = bilibili.outcome().external_post_id() else {
        bail!("bilibili should report a post id");
    };
    ensure!(post.as_str().starts_with("bili_"));
    ensure!(bilibili.tries() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn platform_limits_fail_only_that_platform(stack: Stack, alice: UserId) -> eyre::Result<()> {
    stack.connect(&alice, "xiaohongshu").await?;
    stack.connect(&alice, "zhihu").await?;
    let task = stack
        .draft(&alice, "A very long title that RED will not accept", "xiaohongshu,zhihu")
        .await?;

    let summary = stack.publisher.publish(task.id()).await?;

    ensure!(summary.status() == PublishStatus::PartialSuccess);
    let Some(red) = summary.result_for(Platform::Xiaohongshu) else {
        bail!("missing xiaohongshu result");
    };
    ensure!(red.outcome().error_kind() == Some(FailureKind::ContentRejected));
    ensure!(red.tries() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_task_succeeds_after_connecting_account(
    stack: Stack,
    alice: UserId,
) -> eyre::Result<()> {
    let task = stack.draft(&alice, "Cold brew", "toutiao").await?;

    let first = stack.publisher.publish(task.id()).await?;
    stack.connect(&alice, "toutiao").await?;
    let second = stack.publisher.publish(task.id()).await?;

    ensure!(first.status() == PublishStatus::Failed);
    ensure!(second.status() == PublishStatus::Published);
    ensure!(first.invocation_id() != second.invocation_id());
    let Some(stored) = stack.tasks.find(task.id()).await? else {
        bail!("task should exist");
    };
    ensure!(stored.status() == TaskStatus::Published);
    ensure!(stored.attempts().len() == 2);
    ensure!(stored.last_invocation() == Some(second.invocation_id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_content_yields_identical_post_ids(
    stack: Stack,
    alice: UserId,
) -> eyre::Result<()> {
    stack.connect(&alice, "kuaishou").await?;
    let first_task = stack.draft(&alice, "Latte art", "kuaishou").await?;
    let second_task = stack.draft(&alice, "Latte art", "kuaishou").await?;

    let first = stack.publisher.publish(first_task.id()).await?;
    let second = stack.publisher.publish(second_task.id()).await?;

    let post_of = |summary: &crosspost::task::domain::PublishSummary| {
        summary
            .result_for(Platform::Kuaishou)
            .and_then(|attempt| attempt.outcome().external_post_id().cloned())
    };
    ensure!(post_of(&first).is_some());
    ensure!(post_of(&first) == post_of(&second));
    Ok(())
}
