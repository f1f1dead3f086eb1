//! The metrics exported for a RavenDB server

use super::rules::{Extraction, LabelField, Rule, Source};
use crate::scrape::{DatabaseBlob, GlobalBlob};
use once_cell::sync::Lazy;

/// Counters the server reports both server-wide and per database, under the
/// same field paths
const TRAFFIC: [(&str, &str, &str); 6] = [
    ("request_count", "Number of requests served", "/Requests/RequestsPerSec/Count"),
    ("document_put_count", "Number of document puts", "/Docs/PutsPerSec/Count"),
    ("document_put_bytes", "Bytes written by document puts", "/Docs/BytesPutsPerSec/Count"),
    (
        "mapindex_indexed_count",
        "Documents indexed by map indexes",
        "/MapIndexes/IndexedPerSec/Count",
    ),
    (
        "mapreduceindex_mapped_count",
        "Documents mapped by map-reduce indexes",
        "/MapReduceIndexes/MappedPerSec/Count",
    ),
    (
        "mapreduceindex_reduced_count",
        "Results reduced by map-reduce indexes",
        "/MapReduceIndexes/ReducedPerSec/Count",
    ),
];

fn traffic_rules(prefix: &str, source: Source) -> impl Iterator<Item = Rule> + '_ {
    TRAFFIC.iter().map(move |&(suffix, help, path)| {
        Rule::counter(format!("{}{}", prefix, suffix), help, source, Extraction::Scalar(path))
    })
}

const INDEX_LABELS: &[LabelField] = &[LabelField::new("type", "/Type")];

const TASK_LABELS: &[LabelField] = &[
    LabelField::new("type", "/TaskType"),
    LabelField::new("connection_status", "/TaskConnectionStatus"),
];

const STORAGE_LABELS: &[LabelField] = &[LabelField::new("type", "/Type")];

fn global_rules() -> Vec<Rule> {
    use GlobalBlob::*;

    let mut rules = vec![
        Rule::counter(
            "ravendb_cpu_time_seconds",
            "CPU time used by the server process",
            Source::Global(Cpu),
            Extraction::Duration("/CpuStats/0/TotalProcessorTime"),
        ),
        Rule::gauge(
            "ravendb_working_set_bytes",
            "Working set of the server process",
            Source::Global(Memory),
            Extraction::Scalar("/WorkingSet"),
        ),
        Rule::gauge(
            "ravendb_unmanaged_allocations_bytes",
            "Unmanaged memory allocated by the server",
            Source::Global(Memory),
            Extraction::Scalar("/TotalUnmanagedAllocations"),
        ),
        Rule::gauge(
            "ravendb_memory_mapped_bytes",
            "Memory mapped by the server",
            Source::Global(Memory),
            Extraction::Scalar("/TotalMemoryMapped"),
        ),
        Rule::gauge(
            "ravendb_is_leader",
            "Whether this node is the cluster leader",
            Source::Global(NodeInfo),
            Extraction::Equals {
                field: "/CurrentState",
                expected: "Leader",
            },
        ),
        Rule::gauge(
            "ravendb_node_cores",
            "Number of cores available to the node",
            Source::Global(NodeInfo),
            Extraction::Scalar("/NumberOfCores"),
        ),
    ];
    rules.extend(traffic_rules("ravendb_", Source::Global(Metrics)));
    rules
}

fn database_rules() -> Vec<Rule> {
    use DatabaseBlob::*;

    let mut rules: Vec<Rule> = traffic_rules("ravendb_database_", Source::Database(Metrics)).collect();
    rules.extend([
        Rule::gauge(
            "ravendb_database_concurrent_requests",
            "Requests currently being served",
            Source::Database(Metrics),
            Extraction::Scalar("/Requests/ConcurrentRequestsCount"),
        ),
        Rule::gauge(
            "ravendb_database_documents",
            "Number of documents",
            Source::Database(Stats),
            Extraction::Scalar("/CountOfDocuments"),
        ),
        Rule::gauge(
            "ravendb_database_indexes",
            "Number of indexes",
            Source::Database(Stats),
            Extraction::Scalar("/CountOfIndexes"),
        ),
        Rule::gauge(
            "ravendb_database_stale_indexes",
            "Number of stale indexes",
            Source::Database(Stats),
            Extraction::Count {
                array: "/Indexes",
                flag: Some("/IsStale"),
            },
        ),
        Rule::gauge(
            "ravendb_database_attachments",
            "Number of attachments",
            Source::Database(Stats),
            Extraction::Scalar("/CountOfAttachments"),
        ),
        Rule::gauge(
            "ravendb_database_size_bytes",
            "Size of the database on disk",
            Source::Database(Stats),
            Extraction::Scalar("/SizeOnDisk/SizeInBytes"),
        ),
        Rule::gauge(
            "ravendb_database_uptime_seconds",
            "Time since the database was loaded",
            Source::Database(Info),
            Extraction::Duration("/UpTime"),
        ),
        Rule::gauge(
            "ravendb_database_encrypted",
            "Whether the database is encrypted",
            Source::Database(Info),
            Extraction::Flag("/IsEncrypted"),
        ),
        Rule::gauge(
            "ravendb_collection_documents",
            "Number of documents per collection",
            Source::Database(Collections),
            Extraction::Entries {
                object: "/Collections",
                label: "collection",
            },
        ),
        Rule::gauge(
            "ravendb_database_index_definitions",
            "Number of index definitions by type",
            Source::Database(Indexes),
            Extraction::GroupCount {
                array: "/Results",
                labels: INDEX_LABELS,
            },
        ),
        Rule::gauge(
            "ravendb_database_task_count",
            "Number of ongoing tasks by type and connection status",
            Source::Database(Tasks),
            Extraction::GroupCount {
                array: "/OngoingTasksList",
                labels: TASK_LABELS,
            },
        ),
        Rule::gauge(
            "ravendb_database_storage_allocated_bytes",
            "Space allocated by data files, by storage type",
            Source::Database(Storage),
            Extraction::GroupSum {
                array: "/Results",
                labels: STORAGE_LABELS,
                value: "/Report/DataFile/AllocatedSpaceInBytes",
            },
        ),
        Rule::gauge(
            "ravendb_database_storage_used_bytes",
            "Space used in data files, by storage type",
            Source::Database(Storage),
            Extraction::GroupSum {
                array: "/Results",
                labels: STORAGE_LABELS,
                value: "/Report/DataFile/UsedSpaceInBytes",
            },
        ),
    ]);
    rules
}

/// Every rule, server-wide rules first
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    let mut rules = global_rules();
    rules.extend(database_rules());
    rules
});
