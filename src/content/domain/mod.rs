//! Domain model for content generation requests.

mod error;
mod request;

pub use error::ContentDomainError;
pub use request::{GeneratedContent, GenerationRequest};
