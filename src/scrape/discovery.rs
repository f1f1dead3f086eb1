//! Discovery of the databases hosted by the server

use super::paths::DATABASES;
use crate::client::StatsSource;
use crate::utils::error::{ExporterError, Result};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DatabaseList {
    #[serde(default)]
    databases: Vec<Value>,
}

/// One entry of the database list
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseRecord {
    /// Database name
    pub name: String,
    /// The raw list entry, kept for fields such as the uptime
    pub info: Bytes,
}

/// Ask the server which databases it hosts
pub async fn discover_databases<S: StatsSource + ?Sized>(source: &S) -> Result<Vec<DatabaseRecord>> {
    let body = source.get(DATABASES).await?;
    let records = parse_database_list(&body)?;
    debug!(databases = records.len(), "Discovered databases");
    Ok(records)
}

/// Parse the body of the database list endpoint. Disabled databases are left
/// out since their endpoints cannot be queried.
pub fn parse_database_list(body: &[u8]) -> Result<Vec<DatabaseRecord>> {
    let list: DatabaseList = serde_json::from_slice(body)
        .map_err(|e| ExporterError::discovery(format!("invalid database list: {}", e)))?;

    let mut records = Vec::with_capacity(list.databases.len());
    for entry in list.databases {
        let Some(name) = entry.get("Name").and_then(Value::as_str) else {
            warn!("Skipping database list entry without a name");
            continue;
        };

        if entry.get("Disabled").and_then(Value::as_bool) == Some(true) {
            debug!(database = name, "Skipping disabled database");
            continue;
        }

        records.push(DatabaseRecord {
            name: name.to_string(),
            info: Bytes::from(serde_json::to_vec(&entry)?),
        });
    }

    Ok(records)
}
