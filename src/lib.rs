//! # ravendb-exporter
//!
//! Prometheus exporter for RavenDB.
//!
//! Each scrape discovers the databases hosted by the server, fetches the
//! server-wide and per-database debug endpoints with a bounded pool of
//! workers, and maps the JSON documents onto labelled metric samples. If any
//! endpoint fails, the scrape reports `ravendb_exporter_up 0` and nothing else.
//!
//! ## Running a scrape
//!
//! ```rust,no_run
//! use ravendb_exporter::{Config, RavenDbClient, Scraper, tls::Credential};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let credential = Credential::load(&config.tls)?;
//!     let client = RavenDbClient::new(&config.ravendb, &credential)?;
//!
//!     let scraper = Scraper::new(Arc::new(client), config.ravendb.concurrent_requests);
//!     let outcome = scraper.scrape().await;
//!     println!("{}", ravendb_exporter::monitoring::render(&outcome)?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod client;
pub mod config;
pub mod extract;
pub mod monitoring;
pub mod scrape;
pub mod server;
pub mod tls;
pub mod utils;

pub use client::{RavenDbClient, StatsSource};
pub use config::Config;
pub use extract::{MetricKind, MetricSample};
pub use scrape::{ScrapeOutcome, Scraper, StatsObject};
pub use utils::error::{ExporterError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
