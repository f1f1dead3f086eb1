//! Server startup from a resolved configuration

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from `config` and run it until it stops
pub async fn run_server(config: Config) -> Result<()> {
    let server = HttpServer::new(&config)?;

    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("   GET  / - Landing page");
    info!("   GET  {} - Metrics", server.config().metrics_path);
    info!("   GET  /health - Health check");

    server.start().await
}
