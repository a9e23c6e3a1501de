//! Content assistant service.

mod assistant;

pub use assistant::{ContentAssistError, ContentAssistResult, ContentAssistService};
