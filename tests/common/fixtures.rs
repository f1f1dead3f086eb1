//! RavenDB response bodies and credential files

use serde_json::{Value, json};
use std::path::PathBuf;

/// Password of every encrypted key fixture
pub const KEY_PASSWORD: &str = "raven-secret";

/// Absolute path of a file under `tests/fixtures/tls`
pub fn tls_fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/tls")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

pub fn database_list(names: &[&str]) -> Value {
    let databases: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "Name": name,
                "Disabled": false,
                "IsEncrypted": false,
                "UpTime": "1.02:03:04.5000000"
            })
        })
        .collect();
    json!({ "Databases": databases })
}

pub fn cpu_stats() -> Value {
    json!({
        "CpuStats": [{
            "ProcessName": "Raven.Server",
            "TotalProcessorTime": "00:01:40"
        }]
    })
}

pub fn memory_stats() -> Value {
    json!({
        "WorkingSet": 524288000,
        "TotalUnmanagedAllocations": 104857600,
        "TotalMemoryMapped": 209715200
    })
}

pub fn node_info(state: &str) -> Value {
    json!({
        "NodeTag": "A",
        "CurrentState": state,
        "NumberOfCores": 4
    })
}

/// Shape shared by `/admin/metrics` and `/databases/{db}/metrics`
pub fn traffic_metrics(requests: u64) -> Value {
    json!({
        "Requests": {
            "RequestsPerSec": { "Count": requests },
            "ConcurrentRequestsCount": 2
        },
        "Docs": {
            "PutsPerSec": { "Count": 50 },
            "BytesPutsPerSec": { "Count": 81920 }
        },
        "MapIndexes": { "IndexedPerSec": { "Count": 30 } },
        "MapReduceIndexes": {
            "MappedPerSec": { "Count": 20 },
            "ReducedPerSec": { "Count": 10 }
        }
    })
}

pub fn collection_stats() -> Value {
    json!({
        "CountOfDocuments": 1059,
        "Collections": { "Orders": 830, "Employees": 9, "Companies": 91 }
    })
}

pub fn index_list() -> Value {
    json!({
        "Results": [
            { "Name": "Orders/ByCompany", "Type": "MapReduce" },
            { "Name": "Orders/Totals", "Type": "Map" },
            { "Name": "Companies/ByName", "Type": "Map" }
        ]
    })
}

pub fn database_stats() -> Value {
    json!({
        "CountOfDocuments": 1059,
        "CountOfIndexes": 3,
        "CountOfAttachments": 17,
        "Indexes": [
            { "Name": "Orders/ByCompany", "IsStale": true },
            { "Name": "Orders/Totals", "IsStale": false },
            { "Name": "Companies/ByName", "IsStale": false }
        ],
        "SizeOnDisk": { "SizeInBytes": 33554432 }
    })
}

pub fn storage_report() -> Value {
    json!({
        "BasePath": "/var/lib/ravendb/Databases/Northwind",
        "Results": [
            {
                "Name": "Documents",
                "Type": "Documents",
                "Report": { "DataFile": { "AllocatedSpaceInBytes": 16777216, "UsedSpaceInBytes": 4194304 } }
            },
            {
                "Name": "Orders/ByCompany",
                "Type": "Index",
                "Report": { "DataFile": { "AllocatedSpaceInBytes": 1048576, "UsedSpaceInBytes": 524288 } }
            },
            {
                "Name": "Orders/Totals",
                "Type": "Index",
                "Report": { "DataFile": { "AllocatedSpaceInBytes": 1048576, "UsedSpaceInBytes": 262144 } }
            }
        ]
    })
}

pub fn ongoing_tasks() -> Value {
    json!({
        "OngoingTasksList": [
            { "TaskName": "to-dr", "TaskType": "Replication", "TaskConnectionStatus": "Active" },
            { "TaskName": "to-qa", "TaskType": "Replication", "TaskConnectionStatus": "Active" },
            { "TaskName": "etl", "TaskType": "RavenEtl", "TaskConnectionStatus": "NotActive" }
        ]
    })
}
