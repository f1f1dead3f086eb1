//! Validators for the exporter configuration sections

use super::Validate;
use crate::config::models::{RavenDbConfig, ServerConfig, TlsConfig};
use std::time::Duration;

impl Validate for RavenDbConfig {
    fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.url)
            .map_err(|e| format!("Invalid RavenDB URL '{}': {}", self.url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "RavenDB URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout == Duration::ZERO {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.concurrent_requests == 0 {
            return Err("Concurrent requests must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Validate for TlsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.use_auth {
            return Ok(());
        }

        let missing: Vec<&str> = [
            ("CA cert", &self.ca_cert),
            ("client cert", &self.client_cert),
            ("client private key", &self.client_key),
        ]
        .into_iter()
        .filter(|(_, path)| path.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(format!(
                "when using authentication you need to specify the CA cert, client cert and client private key (missing: {})",
                missing.join(", ")
            ));
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if !self.metrics_path.starts_with('/') || self.metrics_path == "/" {
            return Err(format!(
                "Metrics path must start with '/' and cannot be the root, got '{}'",
                self.metrics_path
            ));
        }

        Ok(())
    }
}
