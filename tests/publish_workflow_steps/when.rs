//! When steps for publish workflow BDD scenarios.

use super::world::{PublishWorld, run_async};
use rstest_bdd_macros::when;

fn publish(world: &mut PublishWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let orchestrator = world.orchestrator();
    let result = run_async(orchestrator.publish(task_id));
    world.results.push(result);
    Ok(())
}

#[when("the task is published")]
fn task_is_published(world: &mut PublishWorld) -> Result<(), eyre::Report> {
    publish(world)
}

#[when("the task is published again")]
fn task_is_published_again(world: &mut PublishWorld) -> Result<(), eyre::Report> {
    publish(world)
}
