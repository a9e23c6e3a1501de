//! Layered service configuration.
//!
//! Values resolve in order: built-in defaults, an optional TOML file
//! (`crosspost.toml` in the working directory unless a path is given), then
//! `CROSSPOST_`-prefixed environment variables using `__` between nested
//! keys, for example `CROSSPOST_PUBLISH__MAX_RETRIES=3`.

use crate::publish::domain::PublishPolicy;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const ENV_PREFIX: &str = "CROSSPOST";
const DEFAULT_FILE_STEM: &str = "crosspost";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    /// A value was read but is out of range.
    #[error("invalid configuration value for {key}: {reason}")]
    Invalid {
        /// Dotted configuration key.
        key: &'static str,
        /// Why the value was refused.
        reason: &'static str,
    },
}

/// Root configuration of the `crosspostd` service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Publish dispatch limits.
    pub publish: PublishConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API binds to.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080)),
        }
    }
}

/// Publish dispatch limits as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Timeout of each adapter call in milliseconds.
    pub attempt_timeout_ms: u64,
    /// Extra tries allowed after a transient failure.
    pub max_retries: u32,
    /// Backoff before the first retry in milliseconds.
    pub retry_backoff_ms: u64,
    /// Upper bound of the retry backoff in milliseconds.
    pub max_retry_backoff_ms: u64,
    /// Platforms dispatched at once within one invocation.
    pub max_concurrency: usize,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: 10_000,
            max_retries: 2,
            retry_backoff_ms: 250,
            max_retry_backoff_ms: 4_000,
            max_concurrency: 6,
        }
    }
}

impl PublishConfig {
    /// Converts the configured limits into a [`PublishPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Invalid`] for a zero timeout, zero
    /// concurrency, or an initial backoff above its cap.
    pub fn to_policy(&self) -> Result<PublishPolicy, ConfigLoadError> {
        if self.attempt_timeout_ms == 0 {
            return Err(ConfigLoadError::Invalid {
                key: "publish.attempt_timeout_ms",
                reason: "must be greater than zero",
            });
        }
        let Some(max_concurrency) = NonZeroUsize::new(self.max_concurrency) else {
            return Err(ConfigLoadError::Invalid {
                key: "publish.max_concurrency",
                reason: "must be greater than zero",
            });
        };
        if self.retry_backoff_ms > self.max_retry_backoff_ms {
            return Err(ConfigLoadError::Invalid {
                key: "publish.retry_backoff_ms",
                reason: "must not exceed publish.max_retry_backoff_ms",
            });
        }

        Ok(PublishPolicy::default()
            .with_attempt_timeout(Duration::from_millis(self.attempt_timeout_ms))
            .with_max_retries(self.max_retries)
            .with_retry_backoff(
                Duration::from_millis(self.retry_backoff_ms),
                Duration::from_millis(self.max_retry_backoff_ms),
            )
            .with_max_concurrency(max_concurrency))
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the file and the process environment.
    ///
    /// Without an explicit `path`, a `crosspost.toml` in the working
    /// directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a source cannot be parsed or a value
    /// is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        Self::load_with_env(path, None)
    }

    /// Loads configuration reading environment variables from `env` instead
    /// of the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a source cannot be parsed or a value
    /// is out of range.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigLoadError> {
        let file = match path {
            Some(explicit) => File::from(explicit),
            None => File::with_name(DEFAULT_FILE_STEM).required(false),
        };
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let loaded: Self = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Invalid`] when a value is out of range.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.publish.to_policy().map(|_| ())
    }
}
