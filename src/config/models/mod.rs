//! Configuration data models
//!
//! This module defines all configuration structures used throughout the exporter.

pub mod ravendb;
pub mod server;
pub mod tls;

// Re-export all configuration types
pub use ravendb::*;
pub use server::*;
pub use tls::*;

use std::time::Duration;

/// Default RavenDB URL
pub fn default_ravendb_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default request timeout
pub fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Default number of concurrent requests per scrape
pub fn default_concurrent_requests() -> usize {
    16
}

/// Default listen host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default listen port
pub fn default_port() -> u16 {
    9999
}

/// Default metrics path
pub fn default_metrics_path() -> String {
    "/metrics".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
