//! Command line flags
//!
//! Every flag is optional so that a value coming from the YAML file is only
//! overridden when the flag or its environment variable is actually set.

use super::Config;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Prometheus exporter for RavenDB
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ravendb-exporter", version, about)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, env = "RAVENDB_EXPORTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// RavenDB URL [default: http://localhost:8080]
    #[arg(long, env = "RAVENDB_URL")]
    pub ravendb_url: Option<String>,

    /// Host to listen on [default: 0.0.0.0]
    #[arg(long, env = "LISTEN_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 9999]
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Path the metrics are served on [default: /metrics]
    #[arg(long, env = "METRICS_PATH")]
    pub metrics_path: Option<String>,

    /// Timeout when calling RavenDB [default: 10s]
    #[arg(long, env = "TIMEOUT", value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Maximum number of concurrent requests to RavenDB [default: 16]
    #[arg(long, env = "CONCURRENT_REQUESTS")]
    pub concurrent_requests: Option<usize>,

    /// Path to CA public cert file
    #[arg(long, env = "CA_CERT")]
    pub ca_cert: Option<String>,

    /// Authenticate the connection to RavenDB with a client certificate.
    /// The environment variable accepts `1`/`0`, `t`/`f`, `yes`/`no` and `on`/`off` too.
    #[arg(long, env = "USE_AUTH", value_parser = clap::builder::BoolishValueParser::new())]
    pub use_auth: bool,

    /// Path to client public certificate used for authentication
    #[arg(long, env = "CLIENT_CERT")]
    pub client_cert: Option<String>,

    /// Path to client private key used for authentication
    #[arg(long, env = "CLIENT_KEY")]
    pub client_key: Option<String>,

    /// Password of the client private key
    #[arg(long, env = "CLIENT_KEY_PASSWORD", hide_env_values = true)]
    pub client_key_password: Option<String>,

    /// Log filter, e.g. `info` or `ravendb_exporter=debug` [default: info]
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Resolve the final configuration: flags over file over defaults
    pub async fn into_config(self) -> Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_file(path).await?,
            None => Config::default(),
        };

        let config = self.overlay(base);
        config.validate()?;
        Ok(config)
    }

    /// Apply every flag that was set on top of `config`
    pub fn overlay(self, mut config: Config) -> Config {
        if let Some(url) = self.ravendb_url {
            config.ravendb.url = url;
        }
        if let Some(timeout) = self.timeout {
            config.ravendb.timeout = timeout;
        }
        if let Some(concurrent) = self.concurrent_requests {
            config.ravendb.concurrent_requests = concurrent;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.metrics_path {
            config.server.metrics_path = path;
        }
        if self.ca_cert.is_some() {
            config.tls.ca_cert = self.ca_cert;
        }
        if self.use_auth {
            config.tls.use_auth = true;
        }
        if self.client_cert.is_some() {
            config.tls.client_cert = self.client_cert;
        }
        if self.client_key.is_some() {
            config.tls.client_key = self.client_key;
        }
        if self.client_key_password.is_some() {
            config.tls.client_key_password = self.client_key_password;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config
    }
}
