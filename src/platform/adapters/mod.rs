//! Adapter implementations for the platform publishing port.

mod registry;
mod scripted;
mod simulated;

pub use registry::PlatformAdapterRegistry;
pub use scripted::ScriptedPlatformAdapter;
pub use simulated::{PlatformProfile, SimulatedPlatformAdapter};
