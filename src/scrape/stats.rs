//! Validated per-cycle view of the server

use bytes::Bytes;

/// Server-wide documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalBlob {
    Cpu,
    Memory,
    Metrics,
    NodeInfo,
}

impl GlobalBlob {
    pub const ALL: [GlobalBlob; 4] = [Self::Cpu, Self::Memory, Self::Metrics, Self::NodeInfo];
}

/// Documents fetched for every database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseBlob {
    /// The database's entry in the database list
    Info,
    Collections,
    Indexes,
    Metrics,
    Stats,
    Storage,
    Tasks,
}

impl DatabaseBlob {
    pub const ALL: [DatabaseBlob; 7] = [
        Self::Info,
        Self::Collections,
        Self::Indexes,
        Self::Metrics,
        Self::Stats,
        Self::Storage,
        Self::Tasks,
    ];
}

/// Raw response bodies of one successful cycle.
///
/// Only built when every fetch of the cycle succeeded. A body that was never
/// requested is empty.
#[derive(Debug, Clone, Default)]
pub struct StatsObject {
    pub cpu: Bytes,
    pub memory: Bytes,
    pub metrics: Bytes,
    pub node_info: Bytes,
    pub databases: Vec<DatabaseStats>,
}

impl StatsObject {
    pub fn global(&self, blob: GlobalBlob) -> &Bytes {
        match blob {
            GlobalBlob::Cpu => &self.cpu,
            GlobalBlob::Memory => &self.memory,
            GlobalBlob::Metrics => &self.metrics,
            GlobalBlob::NodeInfo => &self.node_info,
        }
    }

    pub fn database(&self, name: &str) -> Option<&DatabaseStats> {
        self.databases.iter().find(|db| db.name == name)
    }
}

/// Response bodies for one database
#[derive(Debug, Clone, Default)]
pub struct DatabaseStats {
    pub name: String,
    pub info: Bytes,
    pub collections: Bytes,
    pub indexes: Bytes,
    pub metrics: Bytes,
    pub stats: Bytes,
    pub storage: Bytes,
    pub tasks: Bytes,
}

impl DatabaseStats {
    pub fn blob(&self, blob: DatabaseBlob) -> &Bytes {
        match blob {
            DatabaseBlob::Info => &self.info,
            DatabaseBlob::Collections => &self.collections,
            DatabaseBlob::Indexes => &self.indexes,
            DatabaseBlob::Metrics => &self.metrics,
            DatabaseBlob::Stats => &self.stats,
            DatabaseBlob::Storage => &self.storage,
            DatabaseBlob::Tasks => &self.tasks,
        }
    }
}
