//! Mock RavenDB server

use super::fixtures;
use ravendb_exporter::scrape::DatabaseEndpoint;
use ravendb_exporter::scrape::paths::{CPU_STATS, DATABASES, MEMORY_STATS, NODE_INFO, SERVER_METRICS};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A wiremock server answering the endpoints the exporter reads
pub struct RavenMock {
    server: MockServer,
}

impl RavenMock {
    /// A server with no mounted endpoints; every request gets 404
    pub async fn empty() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A leader node hosting `databases`, every endpoint answering
    pub async fn healthy(databases: &[&str]) -> Self {
        Self::with_node_state(databases, "Leader").await
    }

    /// Like [`RavenMock::healthy`], with the node in cluster state `state`
    pub async fn with_node_state(databases: &[&str], state: &str) -> Self {
        let mock = Self::empty().await;

        mock.json(DATABASES, fixtures::database_list(databases)).await;
        mock.json(CPU_STATS, fixtures::cpu_stats()).await;
        mock.json(MEMORY_STATS, fixtures::memory_stats()).await;
        mock.json(SERVER_METRICS, fixtures::traffic_metrics(1000)).await;
        mock.json(NODE_INFO, fixtures::node_info(state)).await;

        for database in databases {
            mock.json(&DatabaseEndpoint::Collections.path(database), fixtures::collection_stats())
                .await;
            mock.json(&DatabaseEndpoint::Indexes.path(database), fixtures::index_list())
                .await;
            mock.json(&DatabaseEndpoint::Metrics.path(database), fixtures::traffic_metrics(250))
                .await;
            mock.json(&DatabaseEndpoint::Stats.path(database), fixtures::database_stats())
                .await;
            mock.json(&DatabaseEndpoint::StorageReport.path(database), fixtures::storage_report())
                .await;
            mock.json(&DatabaseEndpoint::Tasks.path(database), fixtures::ongoing_tasks())
                .await;
        }

        mock
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer `route` with a JSON body
    pub async fn json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Make `route` answer with `status`, overriding any earlier mock
    pub async fn fail(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make `route` answer with a body that is not JSON
    pub async fn garble(&self, route: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make `route` answer only after `delay`
    pub async fn stall(&self, route: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}").set_delay(delay))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
