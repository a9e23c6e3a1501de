//! Then steps for publish workflow BDD scenarios.

use super::world::{PublishWorld, platform, run_async};
use crosspost::publish::services::PublishError;
use crosspost::task::{
    domain::{PublishAttempt, TaskStatus},
    ports::TaskRepository,
};
use rstest_bdd_macros::then;

fn attempt_for<'a>(
    world: &'a PublishWorld,
    platform_name: &str,
) -> Result<&'a PublishAttempt, eyre::Report> {
    let target = platform(platform_name)?;
    world
        .last_summary()?
        .result_for(target)
        .ok_or_else(|| eyre::eyre!("no result for {platform_name}"))
}

#[then(r#"the publish status is "{status}""#)]
fn publish_status_is(world: &PublishWorld, status: String) -> Result<(), eyre::Report> {
    let actual = world.last_summary()?.status();
    if actual.as_str() != status {
        return Err(eyre::eyre!("expected publish status {status}, found {actual}"));
    }
    Ok(())
}

#[then(r#""{platform_name}" succeeded"#)]
fn platform_succeeded(world: &PublishWorld, platform_name: String) -> Result<(), eyre::Report> {
    let attempt = attempt_for(world, &platform_name)?;
    if !attempt.is_success() {
        return Err(eyre::eyre!(
            "expected {platform_name} to succeed, got {:?}",
            attempt.outcome()
        ));
    }
    Ok(())
}

#[then(r#""{platform_name}" failed with "{kind}""#)]
fn platform_failed_with(
    world: &PublishWorld,
    platform_name: String,
    kind: String,
) -> Result<(), eyre::Report> {
    let attempt = attempt_for(world, &platform_name)?;
    let actual = attempt.outcome().error_kind();
    if actual.map(|found| found.as_str()) != Some(kind.as_str()) {
        return Err(eyre::eyre!(
            "expected {platform_name} to fail with {kind}, got {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#""{platform_name}" was tried {tries:u32} times"#)]
fn platform_was_tried(
    world: &PublishWorld,
    platform_name: String,
    tries: u32,
) -> Result<(), eyre::Report> {
    let actual = attempt_for(world, &platform_name)?.tries();
    if actual != tries {
        return Err(eyre::eyre!(
            "expected {platform_name} to be tried {tries} times, got {actual}"
        ));
    }
    Ok(())
}

#[then(r#""{platform_name}" received {calls:usize} calls"#)]
fn platform_received_calls(
    world: &PublishWorld,
    platform_name: String,
    calls: usize,
) -> Result<(), eyre::Report> {
    let adapter = world
        .adapters
        .get(&platform(&platform_name)?)
        .ok_or_else(|| eyre::eyre!("no adapter scripted for {platform_name}"))?;
    if adapter.calls() != calls {
        return Err(eyre::eyre!(
            "expected {calls} calls to {platform_name}, got {}",
            adapter.calls()
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &PublishWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let task = run_async(world.tasks.find_by_id(task_id))?
        .ok_or_else(|| eyre::eyre!("task {task_id} disappeared"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected task status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("both publishes report the same invocation")]
fn same_invocation(world: &PublishWorld) -> Result<(), eyre::Report> {
    let [Ok(first), Ok(second)] = world.results.as_slice() else {
        return Err(eyre::eyre!(
            "expected two successful publishes, got {:?}",
            world.results
        ));
    };
    if first.invocation_id() != second.invocation_id() || first.results() != second.results() {
        return Err(eyre::eyre!("republish produced a different summary"));
    }
    Ok(())
}

#[then("the publish is rejected as a conflict")]
fn rejected_as_conflict(world: &PublishWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(result, Err(PublishError::Conflict(_))) {
        return Err(eyre::eyre!("expected Conflict, got {result:?}"));
    }
    Ok(())
}
