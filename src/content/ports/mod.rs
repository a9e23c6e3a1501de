//! Port contracts for content generation.

pub mod generator;

pub use generator::{ContentGenerator, ContentGeneratorError, ContentGeneratorResult};
