//! Runs the crosspost HTTP service.
//!
//! Usage:
//!
//! ```text
//! crosspostd [--config <path>]
//! ```
//!
//! Without `--config`, a `crosspost.toml` in the working directory is read
//! when present. Every value can be overridden through `CROSSPOST_`
//! environment variables, for example `CROSSPOST_SERVER__BIND_ADDRESS`.
//! The service runs against in-memory stores and the simulated platform
//! adapters until the process receives Ctrl-C.

use crosspost::config::{AppConfig, ConfigLoadError};
use crosspost::platform::adapters::PlatformAdapterRegistry;
use crosspost::telemetry::{self, TelemetryError};
use crosspost::web::{AppState, create_app};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::runtime::Builder;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the daemon.
#[derive(Debug, Error)]
enum DaemonError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigLoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    let config_path = parse_args(env::args())?;
    run(config_path.as_deref()).map_err(Into::into)
}

fn run(config_path: Option<&std::path::Path>) -> Result<(), DaemonError> {
    let config = AppConfig::load(config_path)?;
    telemetry::init(&config.logging)?;
    let policy = config.publish.to_policy()?;
    let state = AppState::in_memory(PlatformAdapterRegistry::simulated(), policy);

    build_runtime()?.block_on(async {
        let address = config.server.bind_address;
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| DaemonError::Bind { address, source })?;
        info!(%address, "crosspost listening");

        axum::serve(listener, create_app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(DaemonError::Serve)?;
        info!("crosspost stopped");
        Ok(())
    })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, DaemonError> {
    let _program = args.next();
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| DaemonError::InvalidArgs("--config requires a path".into()))?;
                config_path = Some(PathBuf::from(path));
            }
            other => {
                return Err(DaemonError::InvalidArgs(format!(
                    "unexpected argument: {other}"
                )));
            }
        }
    }
    Ok(config_path)
}

fn build_runtime() -> Result<tokio::runtime::Runtime, DaemonError> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(DaemonError::RuntimeInit)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
#[path = "crosspostd/tests.rs"]
mod tests;
