//! ravendb-exporter - Prometheus exporter for RavenDB

#![allow(missing_docs)]

use clap::Parser;
use ravendb_exporter::config::Cli;
use ravendb_exporter::server;
use ravendb_exporter::utils::logging::init_logging;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Cli::parse().into_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Exporter stopped");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
