//! Exposition of scrape results to Prometheus

pub mod exposition;

pub use exposition::{SCRAPE_DURATION_METRIC, UP_METRIC, build_registry, content_type, render};
