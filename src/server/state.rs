//! Application state shared across HTTP handlers

use crate::client::RavenDbClient;
use crate::config::Config;
use crate::scrape::Scraper;
use std::sync::Arc;

/// Resources shared by every handler. Read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// Exporter configuration
    pub config: Arc<Config>,
    /// Runs one scrape per metrics request
    pub scraper: Arc<Scraper<RavenDbClient>>,
}

impl AppState {
    pub fn new(config: Config, scraper: Scraper<RavenDbClient>) -> Self {
        Self {
            config: Arc::new(config),
            scraper: Arc::new(scraper),
        }
    }

    pub fn metrics_path(&self) -> &str {
        &self.config.server.metrics_path
    }
}
