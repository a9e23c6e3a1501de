//! Domain model for target platforms.
//!
//! Platforms form a closed set; anything platform-specific lives behind the
//! adapter port rather than in branching on platform names.

mod content;
mod error;
mod platform;

pub use content::{ExternalPostId, PublishContent};
pub use error::PlatformDomainError;
pub use platform::{Platform, PlatformSet};
