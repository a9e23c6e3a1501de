//! Lookup table selecting the adapter for each platform.

use super::SimulatedPlatformAdapter;
use crate::platform::{domain::Platform, ports::PlatformAdapter};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps each [`Platform`] to the adapter that publishes to it.
///
/// The orchestrator only ever asks the registry for "the adapter of this
/// platform"; all platform-specific behaviour stays behind the adapter.
#[derive(Clone, Default)]
pub struct PlatformAdapterRegistry {
    adapters: HashMap<Platform, Arc<dyn PlatformAdapter>>,
}

impl PlatformAdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with a simulated adapter for every platform.
    #[must_use]
    pub fn simulated() -> Self {
        Platform::ALL
            .into_iter()
            .fold(Self::new(), |registry, platform| {
                registry.with_adapter(platform, Arc::new(SimulatedPlatformAdapter::new(platform)))
            })
    }

    /// Registers an adapter, replacing any previous adapter for the platform.
    #[must_use]
    pub fn with_adapter(mut self, platform: Platform, adapter: Arc<dyn PlatformAdapter>) -> Self {
        self.register(platform, adapter);
        self
    }

    /// Registers an adapter in place.
    pub fn register(&mut self, platform: Platform, adapter: Arc<dyn PlatformAdapter>) {
        self.adapters.insert(platform, adapter);
    }

    /// Returns the adapter for the platform, if one is registered.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<Arc<dyn PlatformAdapter>> {
        self.adapters.get(&platform).cloned()
    }

    /// Returns `true` when an adapter is registered for the platform.
    #[must_use]
    pub fn supports(&self, platform: Platform) -> bool {
        self.adapters.contains_key(&platform)
    }
}

impl fmt::Debug for PlatformAdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut platforms: Vec<Platform> = self.adapters.keys().copied().collect();
        platforms.sort_unstable();
        f.debug_struct("PlatformAdapterRegistry")
            .field("platforms", &platforms)
            .finish()
    }
}
