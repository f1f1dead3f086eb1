//! Classification of endpoint failures

use super::scraper;
use crate::common::RavenMock;
use ravendb_exporter::scrape::DatabaseEndpoint;
use ravendb_exporter::scrape::paths::{CPU_STATS, DATABASES};
use ravendb_exporter::{ExporterError, RavenDbClient, StatsSource};
use ravendb_exporter::config::RavenDbConfig;
use ravendb_exporter::tls::Credential;
use std::time::Duration;

fn client(uri: &str, timeout: Duration) -> RavenDbClient {
    let config = RavenDbConfig {
        url: uri.to_string(),
        timeout,
        concurrent_requests: 1,
    };
    RavenDbClient::new(&config, &Credential::default()).unwrap()
}

#[tokio::test]
async fn test_non_success_status() {
    let raven = RavenMock::empty().await;
    raven.fail(CPU_STATS, 503).await;

    let err = client(&raven.uri(), Duration::from_secs(5)).get(CPU_STATS).await.unwrap_err();

    assert!(matches!(err, ExporterError::UnexpectedStatus { status: 503, ref path } if path == CPU_STATS));
}

#[tokio::test]
async fn test_malformed_body() {
    let raven = RavenMock::empty().await;
    raven.garble(CPU_STATS).await;

    let err = client(&raven.uri(), Duration::from_secs(5)).get(CPU_STATS).await.unwrap_err();
    assert!(matches!(err, ExporterError::MalformedJson { .. }));
}

#[tokio::test]
async fn test_timeout() {
    let raven = RavenMock::empty().await;
    raven.stall(CPU_STATS, Duration::from_secs(2)).await;

    let err = client(&raven.uri(), Duration::from_millis(200)).get(CPU_STATS).await.unwrap_err();
    assert!(matches!(err, ExporterError::Timeout(_)));
}

#[tokio::test]
async fn test_cycle_error_names_a_failed_path() {
    let raven = RavenMock::healthy(&["Northwind"]).await;
    let failing = DatabaseEndpoint::Collections.path("Northwind");
    raven.fail(&failing, 500).await;

    let err = scraper(&raven.uri(), 4, Duration::from_secs(5)).collect().await.unwrap_err();
    assert!(matches!(err, ExporterError::UnexpectedStatus { status: 500, ref path } if *path == failing));
}

#[tokio::test]
async fn test_any_of_several_failures_fails_the_cycle() {
    let raven = RavenMock::healthy(&["Northwind", "Orders"]).await;
    raven.fail(&DatabaseEndpoint::Stats.path("Northwind"), 500).await;
    raven.fail(&DatabaseEndpoint::Tasks.path("Orders"), 404).await;

    let err = scraper(&raven.uri(), 4, Duration::from_secs(5)).collect().await.unwrap_err();
    assert!(matches!(err, ExporterError::UnexpectedStatus { .. }));
}

#[tokio::test]
async fn test_invalid_database_list() {
    let raven = RavenMock::empty().await;
    raven.json(DATABASES, serde_json::json!({"Databases": "Northwind"})).await;

    let err = scraper(&raven.uri(), 4, Duration::from_secs(5)).collect().await.unwrap_err();
    assert!(matches!(err, ExporterError::Discovery(_)));
}
