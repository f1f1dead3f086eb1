//! Tracing subscriber setup

use crate::utils::error::{ExporterError, Result};
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the configured level parse
pub const DEFAULT_LEVEL: &str = "info";

/// Filter for the subscriber. `RUST_LOG` takes precedence over `level`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber
pub fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| ExporterError::internal(format!("Failed to initialize logging: {}", e)))
}
