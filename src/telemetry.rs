//! Structured logging setup.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Builds the event filter.
///
/// `RUST_LOG` wins when set and valid; otherwise the configured directive is
/// used.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the configured directive is
/// malformed.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(from_env) => Ok(from_env),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is malformed or a subscriber
/// is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(filter(config)?);
    if config.json {
        registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }
    Ok(())
}
