//! Port contracts for platform publishing.

pub mod adapter;

pub use adapter::{PlatformAdapter, PlatformError, PlatformErrorKind, PlatformResult};
