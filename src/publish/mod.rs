//! Fan-out publishing of a task to every platform it targets.
//!
//! [`services::PublishOrchestrator`] guards the task's status transition,
//! dispatches one independent unit of work per platform, and settles the
//! task on the aggregate outcome computed by [`domain::aggregate`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
