//! Publish orchestration service.

mod dispatch;
mod orchestrator;

pub use orchestrator::{PublishError, PublishOrchestrator, PublishResult};
