//! Error handling for the exporter
//!
//! This module defines all error types used throughout the exporter.

mod helpers;
mod types;

pub use types::{ExporterError, Result};
