//! Shared HTTP client for the RavenDB endpoints

use crate::config::RavenDbConfig;
use crate::tls::Credential;
use crate::utils::error::{ExporterError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, ClientBuilder};
use serde::de::IgnoredAny;
use std::time::Duration;
use tracing::{debug, trace};

/// Idle connection timeout
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// TCP keepalive interval
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("ravendb-exporter/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a GET for an endpoint path with a JSON body
#[async_trait]
pub trait StatsSource: Send + Sync + 'static {
    /// Fetch `path` and return the raw body. Non-2xx statuses and bodies that
    /// are not JSON are errors.
    async fn get(&self, path: &str) -> Result<Bytes>;
}

/// Client bound to one RavenDB base URL
#[derive(Debug, Clone)]
pub struct RavenDbClient {
    http: Client,
    base_url: String,
}

impl RavenDbClient {
    /// Create the client used for every scrape
    pub fn new(config: &RavenDbConfig, credential: &Credential) -> Result<Self> {
        let builder = ClientBuilder::new()
            .use_rustls_tls()
            // One connection per worker is enough
            .pool_max_idle_per_host(config.concurrent_requests)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .tcp_keepalive(TCP_KEEPALIVE)
            .tcp_nodelay(true)
            .user_agent(USER_AGENT);

        let http = credential.apply(builder).build()?;

        debug!(
            base_url = config.base_url(),
            timeout = ?config.timeout,
            client_auth = credential.has_identity(),
            "Created RavenDB HTTP client"
        );

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl StatsSource for RavenDbClient {
    async fn get(&self, path: &str) -> Result<Bytes> {
        trace!(path, "GET");

        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ExporterError::from_transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExporterError::unexpected_status(path, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExporterError::from_transport(path, e))?;

        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| ExporterError::malformed_json(path, e))?;

        Ok(body)
    }
}
