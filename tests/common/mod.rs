//! Common test utilities for ravendb-exporter
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::RavenMock;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let raven = RavenMock::healthy(&["Northwind"]).await;
//!     // point a RavenDbClient at raven.uri()
//! }
//! ```

pub mod fixtures;
pub mod raven;

pub use raven::RavenMock;
