//! Bounded fan-out of endpoint requests
//!
//! A fixed pool of workers pulls paths from a shared queue and reports one
//! [`FetchResult`] per path over a channel. The caller waits until every path
//! has reported, so at most `workers` requests are ever in flight and a slow
//! or failing path never cancels its siblings.

use crate::client::StatsSource;
use crate::utils::error::{ExporterError, Result};
use bytes::Bytes;
use crossbeam_queue::SegQueue;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, trace};

/// Outcome of fetching a single path
#[derive(Debug)]
pub struct FetchResult {
    pub path: String,
    pub outcome: Result<Bytes>,
}

impl FetchResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ExporterError> {
        self.outcome.as_ref().err()
    }
}

/// Every fetch outcome of one cycle, keyed by path
#[derive(Debug, Default)]
pub struct Snapshot {
    results: HashMap<String, FetchResult>,
}

impl Snapshot {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            results: HashMap::with_capacity(capacity),
        }
    }

    /// Record a result. Each path is written at most once; a second result
    /// for the same path is dropped and `false` is returned.
    pub fn insert(&mut self, result: FetchResult) -> bool {
        if self.results.contains_key(&result.path) {
            return false;
        }
        self.results.insert(result.path.clone(), result);
        true
    }

    pub fn get(&self, path: &str) -> Option<&FetchResult> {
        self.results.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.results.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of paths whose fetch failed
    pub fn failures(&self) -> usize {
        self.results.values().filter(|r| !r.is_ok()).count()
    }

    pub fn into_results(self) -> impl Iterator<Item = FetchResult> {
        self.results.into_values()
    }
}

/// Issues every path of a cycle with at most `workers` requests in flight
pub struct FanOutFetcher<S: StatsSource> {
    source: Arc<S>,
    workers: usize,
}

impl<S: StatsSource> FanOutFetcher<S> {
    /// A worker count of 0 is treated as 1
    pub fn new(source: Arc<S>, workers: usize) -> Self {
        Self {
            source,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Fetch every path exactly once and return once all of them have
    /// completed or failed. Duplicate paths are fetched once.
    pub async fn fetch_all(&self, paths: Vec<String>) -> Snapshot {
        let mut seen = HashSet::with_capacity(paths.len());
        let paths: Vec<String> = paths
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();

        let expected = paths.len();
        let mut snapshot = Snapshot::with_capacity(expected);
        if expected == 0 {
            return snapshot;
        }

        let started = Instant::now();
        let queue = Arc::new(SegQueue::new());
        for path in &paths {
            queue.push(path.clone());
        }

        // Room for every result, so workers never wait on the collector.
        let (tx, mut rx) = mpsc::channel::<FetchResult>(expected);
        let worker_count = self.workers.min(expected);
        let mut workers = JoinSet::new();

        for worker in 0..worker_count {
            let queue = Arc::clone(&queue);
            let source = Arc::clone(&self.source);
            let tx = tx.clone();

            workers.spawn(async move {
                while let Some(path) = queue.pop() {
                    trace!(worker, path = %path, "Fetching");
                    let outcome = source.get(&path).await;
                    if tx.send(FetchResult { path, outcome }).await.is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        while snapshot.len() < expected {
            match rx.recv().await {
                Some(result) => {
                    snapshot.insert(result);
                }
                // Every sender is gone: a worker died before reporting.
                None => break,
            }
        }

        if snapshot.len() < expected {
            for path in paths {
                if !snapshot.contains(&path) {
                    let error = ExporterError::internal(format!("no result reported for {}", path));
                    snapshot.insert(FetchResult {
                        path,
                        outcome: Err(error),
                    });
                }
            }
        }

        debug!(
            paths = expected,
            workers = worker_count,
            failures = snapshot.failures(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched endpoints"
        );

        snapshot
    }
}
