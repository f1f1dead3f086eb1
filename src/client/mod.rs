//! HTTP access to the RavenDB server
//!
//! One `reqwest::Client` is built at startup with the configured timeout and
//! TLS credential, then shared by every scrape.

mod http;

pub use http::{RavenDbClient, StatsSource};
