//! Configuration layering and validation

use clap::Parser;
use ravendb_exporter::ExporterError;
use ravendb_exporter::config::{Cli, Config};
use std::io::Write;
use std::time::Duration;

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_defaults() {
    let config = Cli::default()
        .into_config()
        .await
        .unwrap();

    assert_eq!(config.ravendb.url, "http://localhost:8080");
    assert_eq!(config.ravendb.timeout, Duration::from_secs(10));
    assert_eq!(config.ravendb.concurrent_requests, 16);
    assert_eq!(config.server.address(), "0.0.0.0:9999");
    assert_eq!(config.server.metrics_path, "/metrics");
    assert_eq!(config.log_level, "info");
}

#[tokio::test]
async fn test_flags_override_file() {
    let file = yaml_file(
        "ravendb:\n  url: https://file.example:8443\n  timeout: 30s\nserver:\n  port: 9440\n  metrics_path: /raven\n",
    );
    let path = file.path().to_string_lossy().into_owned();

    let config = Cli::try_parse_from([
        "ravendb-exporter",
        "--config",
        &path,
        "--ravendb-url",
        "https://flag.example:8443",
        "--concurrent-requests",
        "2",
    ])
    .unwrap()
    .into_config()
    .await
    .unwrap();

    assert_eq!(config.ravendb.url, "https://flag.example:8443");
    assert_eq!(config.ravendb.concurrent_requests, 2);
    assert_eq!(config.ravendb.timeout, Duration::from_secs(30));
    assert_eq!(config.server.port, 9440);
    assert_eq!(config.server.metrics_path, "/raven");
}

#[tokio::test]
async fn test_invalid_values_are_rejected() {
    let cases: [&[&str]; 4] = [
        &["ravendb-exporter", "--ravendb-url", "ftp://raven"],
        &["ravendb-exporter", "--concurrent-requests", "0"],
        &["ravendb-exporter", "--metrics-path", "metrics"],
        &["ravendb-exporter", "--port", "0"],
    ];

    for args in cases {
        let err = Cli::try_parse_from(args)
            .unwrap()
            .into_config()
            .await
            .unwrap_err();
        assert!(matches!(err, ExporterError::Config(_)), "{:?}", args);
    }
}

#[tokio::test]
async fn test_auth_requires_files() {
    let err = Cli::try_parse_from(["ravendb-exporter", "--use-auth", "--client-cert", "client.crt"])
        .unwrap()
        .into_config()
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("ca_cert") || message.contains("CA"), "{}", message);
    assert!(message.contains("key"), "{}", message);
}

#[tokio::test]
async fn test_unparseable_file() {
    let file = yaml_file("ravendb: [not, a, mapping]\n");
    let path = file.path().to_string_lossy().into_owned();

    let err = Cli::try_parse_from(["ravendb-exporter", "--config", &path])
        .unwrap()
        .into_config()
        .await
        .unwrap_err();
    assert!(matches!(err, ExporterError::Config(_)));
}

#[test]
fn test_summary_does_not_panic_with_password() {
    let mut config = Config::default();
    config.tls.client_key_password = Some("secret".to_string());
    config.log_summary();
    assert!(!format!("{:?}", config.tls).contains("secret"));
}
