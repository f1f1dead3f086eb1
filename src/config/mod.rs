//! Configuration management for the exporter
//!
//! Configuration comes from command line flags, each of which can also be set
//! through an environment variable, optionally layered over a YAML file.

pub mod cli;
pub mod models;
pub mod validation;

pub use cli::Cli;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ExporterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the exporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RavenDB connection
    #[serde(default)]
    pub ravendb: RavenDbConfig,
    /// TLS and client authentication
    #[serde(default)]
    pub tls: TlsConfig,
    /// Exposition server
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ravendb: RavenDbConfig::default(),
            tls: TlsConfig::default(),
            server: ServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExporterError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ExporterError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration file parsed");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.ravendb
            .validate()
            .map_err(|e| ExporterError::Config(format!("RavenDB config error: {}", e)))?;

        self.tls
            .validate()
            .map_err(|e| ExporterError::Config(format!("Invalid configuration: {}", e)))?;

        self.server
            .validate()
            .map_err(|e| ExporterError::Config(format!("Server config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Log the effective configuration, without secrets
    pub fn log_summary(&self) {
        info!(
            ravendb_url = %self.ravendb.url,
            timeout = ?self.ravendb.timeout,
            concurrent_requests = self.ravendb.concurrent_requests,
            ca_cert = ?self.tls.ca_cert,
            use_auth = self.tls.use_auth,
            client_cert = ?self.tls.client_cert,
            client_key = ?self.tls.client_key,
            key_password_set = self.tls.client_key_password.is_some(),
            "RavenDB exporter configuration"
        );
    }
}
