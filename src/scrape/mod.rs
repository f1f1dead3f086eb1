//! One scrape cycle: discovery, fan-out fetch, aggregation and extraction

pub mod aggregator;
pub mod discovery;
pub mod fetcher;
pub mod paths;
pub mod stats;

pub use aggregator::aggregate;
pub use discovery::{DatabaseRecord, discover_databases, parse_database_list};
pub use fetcher::{FanOutFetcher, FetchResult, Snapshot};
pub use paths::{DatabaseEndpoint, build_paths};
pub use stats::{DatabaseBlob, DatabaseStats, GlobalBlob, StatsObject};

use crate::client::StatsSource;
use crate::extract::{MetricSample, extract};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Result of one cycle
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// Whether every endpoint answered
    pub up: bool,
    /// Empty unless `up`
    pub samples: Vec<MetricSample>,
    pub duration: Duration,
}

impl ScrapeOutcome {
    fn down(duration: Duration) -> Self {
        Self {
            up: false,
            samples: Vec::new(),
            duration,
        }
    }
}

/// Runs scrape cycles against one server. Cycles share nothing but the
/// source, so concurrent scrapes are independent.
pub struct Scraper<S: StatsSource> {
    fetcher: FanOutFetcher<S>,
}

impl<S: StatsSource> Scraper<S> {
    pub fn new(source: Arc<S>, workers: usize) -> Self {
        Self {
            fetcher: FanOutFetcher::new(source, workers),
        }
    }

    pub fn workers(&self) -> usize {
        self.fetcher.workers()
    }

    /// Fetch everything for one cycle. Fails if discovery or any endpoint
    /// fails.
    pub async fn collect(&self) -> Result<StatsObject> {
        let databases = discover_databases(self.fetcher.source().as_ref()).await?;
        let names: Vec<&str> = databases.iter().map(|db| db.name.as_str()).collect();

        let paths = build_paths(&names);
        debug!(databases = names.len(), paths = paths.len(), "Fetching endpoints");

        let snapshot = self.fetcher.fetch_all(paths).await;
        aggregate(snapshot, &databases)
    }

    /// Run a full cycle. Failures are logged and reported as down.
    pub async fn scrape(&self) -> ScrapeOutcome {
        debug!("Running scrape");
        let started = Instant::now();

        match self.collect().await {
            Ok(stats) => {
                let samples = extract(&stats);
                let duration = started.elapsed();
                debug!(
                    samples = samples.len(),
                    databases = stats.databases.len(),
                    elapsed_ms = duration.as_millis() as u64,
                    "Scrape finished"
                );
                ScrapeOutcome {
                    up: true,
                    samples,
                    duration,
                }
            }
            Err(e) => {
                error!(error = %e, "Error while getting data from RavenDB");
                ScrapeOutcome::down(started.elapsed())
            }
        }
    }
}
