//! Endpoint paths fetched each scrape

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Database list
pub const DATABASES: &str = "/databases";
/// Process CPU usage
pub const CPU_STATS: &str = "/admin/debug/cpu/stats";
/// Process memory usage
pub const MEMORY_STATS: &str = "/admin/debug/memory/stats";
/// Server-wide traffic counters
pub const SERVER_METRICS: &str = "/admin/metrics";
/// Cluster role of this node
pub const NODE_INFO: &str = "/cluster/node-info";

/// Paths fetched once per scrape, independent of the database list
pub const GLOBAL_PATHS: [&str; 4] = [CPU_STATS, MEMORY_STATS, SERVER_METRICS, NODE_INFO];

/// Characters escaped in a database name used as a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The per-database endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEndpoint {
    Collections,
    Indexes,
    Metrics,
    Stats,
    StorageReport,
    Tasks,
}

impl DatabaseEndpoint {
    pub const ALL: [DatabaseEndpoint; 6] = [
        Self::Collections,
        Self::Indexes,
        Self::Metrics,
        Self::Stats,
        Self::StorageReport,
        Self::Tasks,
    ];

    fn suffix(self) -> &'static str {
        match self {
            Self::Collections => "/collections/stats",
            Self::Indexes => "/indexes",
            Self::Metrics => "/metrics",
            Self::Stats => "/stats",
            Self::StorageReport => "/debug/storage/report",
            Self::Tasks => "/tasks",
        }
    }

    /// Path of this endpoint for `database`
    pub fn path(self, database: &str) -> String {
        format!(
            "/databases/{}{}",
            utf8_percent_encode(database, SEGMENT),
            self.suffix()
        )
    }
}

/// Every path to fetch this cycle: the global paths followed by each
/// database's endpoints, in database order. Duplicate database names
/// contribute their paths once.
pub fn build_paths<S: AsRef<str>>(databases: &[S]) -> Vec<String> {
    let mut paths: Vec<String> = GLOBAL_PATHS.iter().map(|p| p.to_string()).collect();
    let mut seen = std::collections::HashSet::new();

    for database in databases {
        let database = database.as_ref();
        if !seen.insert(database) {
            continue;
        }
        paths.extend(DatabaseEndpoint::ALL.iter().map(|e| e.path(database)));
    }

    paths
}
