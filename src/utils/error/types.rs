//! Error types for the exporter

use crate::tls::CredentialError;
use thiserror::Error;

/// Result type alias for the exporter
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client certificate, key or CA loading errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Metric registration or encoding errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} from {path}")]
    UnexpectedStatus { path: String, status: u16 },

    /// The server answered with a body that is not JSON
    #[error("Malformed JSON from {path}: {message}")]
    MalformedJson { path: String, message: String },

    /// Request deadline exceeded
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Connection level failures
    #[error("Network error: {0}")]
    Network(String),

    /// Database list could not be obtained
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
