//! Configuration validation
//!
//! Every configuration section implements [`Validate`]; [`crate::config::Config::validate`]
//! runs them all and wraps the first failure in a configuration error.

mod config_validators;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
