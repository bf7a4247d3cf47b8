//! Tracing subscriber setup for the command-line binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! process that embeds it.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(Box<dyn std::error::Error + Send + Sync>),
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Stdout stays reserved for results.
pub fn init() -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(LoggingError::SetGlobal)
}
