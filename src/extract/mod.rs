//! Mapping of server documents onto metric samples
//!
//! Extraction never fails: a field that is missing or has an unexpected type
//! degrades to a zero value (or to no samples for grouped metrics) without
//! affecting any other metric.

pub mod catalog;
pub mod query;
pub mod rules;
pub mod sample;
pub mod timespan;

pub use catalog::RULES;
pub use rules::{Extraction, LabelField, Rule, Source};
pub use sample::{MetricKind, MetricSample};
pub use timespan::parse_seconds;

use crate::scrape::{DatabaseBlob, GlobalBlob, StatsObject};
use serde_json::Value;
use std::collections::HashMap;

/// Label carried by every per-database sample
pub const DATABASE_LABEL: &str = "database";

/// Evaluate the default rule table against `stats`
pub fn extract(stats: &StatsObject) -> Vec<MetricSample> {
    extract_with(&RULES, stats)
}

/// Evaluate `rules` against `stats`. Server-wide samples come first, then
/// each database's samples in database order.
pub fn extract_with(rules: &[Rule], stats: &StatsObject) -> Vec<MetricSample> {
    let globals: HashMap<GlobalBlob, Value> = GlobalBlob::ALL
        .iter()
        .map(|&blob| (blob, query::parse_document(stats.global(blob))))
        .collect();

    let mut samples = Vec::new();
    for rule in rules {
        if let Source::Global(blob) = rule.source {
            samples.extend(rule.samples(&globals[&blob], &[]));
        }
    }

    for database in &stats.databases {
        let documents: HashMap<DatabaseBlob, Value> = DatabaseBlob::ALL
            .iter()
            .map(|&blob| (blob, query::parse_document(database.blob(blob))))
            .collect();
        let base = [(DATABASE_LABEL.to_string(), database.name.clone())];

        for rule in rules {
            if let Source::Database(blob) = rule.source {
                samples.extend(rule.samples(&documents[&blob], &base));
            }
        }
    }

    samples
}
