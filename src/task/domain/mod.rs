//! Domain model for publish tasks.
//!
//! A task carries one piece of content, the platforms it targets, its
//! lifecycle status, and the append-only history of per-platform attempts.
//! Infrastructure concerns stay outside of the domain boundary.

mod attempt;
mod error;
mod ids;
mod status;
mod summary;
mod task;

pub use attempt::{AttemptOutcome, FailureKind, PublishAttempt};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{InvocationId, TaskId};
pub use status::{PublishStatus, TaskStatus};
pub use summary::PublishSummary;
pub use task::Task;
