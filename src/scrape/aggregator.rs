//! Validation and reshaping of a fetch snapshot

use super::discovery::DatabaseRecord;
use super::fetcher::Snapshot;
use super::paths::{CPU_STATS, DatabaseEndpoint, MEMORY_STATS, NODE_INFO, SERVER_METRICS};
use super::stats::{DatabaseStats, StatsObject};
use crate::utils::error::Result;
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Turn a snapshot into a [`StatsObject`].
///
/// Fails with the first failed fetch encountered. Which one that is when
/// several paths failed is unspecified. Paths absent from the snapshot become
/// empty bodies.
pub fn aggregate(snapshot: Snapshot, databases: &[DatabaseRecord]) -> Result<StatsObject> {
    let failures = snapshot.failures();
    if failures > 1 {
        debug!(failures, "Several endpoints failed this cycle");
    }

    let mut bodies: HashMap<String, Bytes> = HashMap::with_capacity(snapshot.len());
    for result in snapshot.into_results() {
        let body = result.outcome?;
        bodies.insert(result.path, body);
    }

    let mut take = |path: &str| bodies.remove(path).unwrap_or_default();

    let mut stats = StatsObject {
        cpu: take(CPU_STATS),
        memory: take(MEMORY_STATS),
        metrics: take(SERVER_METRICS),
        node_info: take(NODE_INFO),
        databases: Vec::with_capacity(databases.len()),
    };

    let mut seen = HashSet::with_capacity(databases.len());
    for record in databases {
        if !seen.insert(record.name.as_str()) {
            continue;
        }
        let name = record.name.as_str();
        stats.databases.push(DatabaseStats {
            name: record.name.clone(),
            info: record.info.clone(),
            collections: take(&DatabaseEndpoint::Collections.path(name)),
            indexes: take(&DatabaseEndpoint::Indexes.path(name)),
            metrics: take(&DatabaseEndpoint::Metrics.path(name)),
            stats: take(&DatabaseEndpoint::Stats.path(name)),
            storage: take(&DatabaseEndpoint::StorageReport.path(name)),
            tasks: take(&DatabaseEndpoint::Tasks.path(name)),
        });
    }

    Ok(stats)
}
