//! Given steps for publish workflow BDD scenarios.

use super::world::{PublishWorld, platform, run_async};
use crosspost::account::{domain::UserId, services::ConnectAccountRequest};
use crosspost::platform::{
    adapters::ScriptedPlatformAdapter,
    domain::ExternalPostId,
    ports::PlatformError,
};
use crosspost::task::{domain::TaskStatus, ports::TaskRepository, services::CreateTaskRequest};
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn post_id(platform_name: &str) -> eyre::Result<ExternalPostId> {
    ExternalPostId::new(format!("{platform_name}_post")).wrap_err("build post id")
}

#[given(r#""{user}" has connected "{platform_name}""#)]
fn user_has_connected(
    world: &mut PublishWorld,
    user: String,
    platform_name: String,
) -> Result<(), eyre::Report> {
    let owner = UserId::new(user).wrap_err("valid scenario user")?;
    let request = ConnectAccountRequest::new(owner, platform_name.clone(), "scenario user")
        .with_external_account_id(format!("{platform_name}-account"));
    run_async(world.account_service.connect(request)).wrap_err("connect scenario account")?;
    Ok(())
}

#[given(r#""{platform_name}" accepts posts"#)]
fn platform_accepts(world: &mut PublishWorld, platform_name: String) -> Result<(), eyre::Report> {
    let adapter = ScriptedPlatformAdapter::succeeding(post_id(&platform_name)?);
    world.adapters.insert(platform(&platform_name)?, adapter);
    Ok(())
}

#[given(r#""{platform_name}" fails transiently {failures:u32} times before accepting"#)]
fn platform_fails_transiently(
    world: &mut PublishWorld,
    platform_name: String,
    failures: u32,
) -> Result<(), eyre::Report> {
    let adapter = ScriptedPlatformAdapter::succeeding(post_id(&platform_name)?).with_responses(
        (0..failures).map(|attempt| Err(PlatformError::transient(format!("outage {attempt}")))),
    );
    world.adapters.insert(platform(&platform_name)?, adapter);
    Ok(())
}

#[given(r#""{platform_name}" rejects the content"#)]
fn platform_rejects(world: &mut PublishWorld, platform_name: String) -> Result<(), eyre::Report> {
    let adapter =
        ScriptedPlatformAdapter::failing(PlatformError::content_rejected("title too long"));
    world.adapters.insert(platform(&platform_name)?, adapter);
    Ok(())
}

#[given(r#"a draft task for "{user}" targeting "{platforms}""#)]
fn draft_task(
    world: &mut PublishWorld,
    user: String,
    platforms: String,
) -> Result<(), eyre::Report> {
    let owner = UserId::new(user).wrap_err("valid scenario user")?;
    let request = CreateTaskRequest::new(owner, "Launch day", "We shipped.", platforms)
        .with_media_url("https://cdn.example/launch.mp4");
    let task = run_async(world.task_service.create(request)).wrap_err("create scenario task")?;
    world.task_id = Some(task.id());
    Ok(())
}

#[given("the task is already being published")]
fn task_in_flight(world: &mut PublishWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    run_async(
        world
            .tasks
            .compare_and_set_status(task_id, TaskStatus::Draft, TaskStatus::Publishing),
    )
    .wrap_err("claim scenario task")?;
    Ok(())
}
