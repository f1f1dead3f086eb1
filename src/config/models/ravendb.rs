//! RavenDB connection configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where and how to reach the RavenDB server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RavenDbConfig {
    /// Base URL of the server
    #[serde(default = "default_ravendb_url")]
    pub url: String,
    /// Deadline shared by every request of a scrape
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// Maximum number of requests in flight during a scrape
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,
}

impl Default for RavenDbConfig {
    fn default() -> Self {
        Self {
            url: default_ravendb_url(),
            timeout: default_timeout(),
            concurrent_requests: default_concurrent_requests(),
        }
    }
}

impl RavenDbConfig {
    /// Base URL without the trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
