//! Helper functions for creating specific error types

use super::types::ExporterError;

/// Helper functions for creating specific errors
impl ExporterError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn discovery<S: Into<String>>(message: S) -> Self {
        Self::Discovery(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn unexpected_status<S: Into<String>>(path: S, status: u16) -> Self {
        Self::UnexpectedStatus {
            path: path.into(),
            status,
        }
    }

    pub fn malformed_json<S: Into<String>>(path: S, message: impl std::fmt::Display) -> Self {
        Self::MalformedJson {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Map a transport error for `path` onto the timeout / network split
    pub fn from_transport(path: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{} timed out", path))
        } else if err.is_connect() {
            Self::Network(format!("{}: connection failed: {}", path, err))
        } else if let Some(status) = err.status() {
            Self::unexpected_status(path, status.as_u16())
        } else {
            Self::HttpClient(err)
        }
    }
}
