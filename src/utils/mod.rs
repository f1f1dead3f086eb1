//! Shared utilities

pub mod error;
pub mod logging;

pub use error::{ExporterError, Result};
pub use logging::init_logging;
