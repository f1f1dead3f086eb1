//! HTTP server core implementation

use crate::client::RavenDbClient;
use crate::config::{Config, ServerConfig};
use crate::scrape::Scraper;
use crate::server::handlers::{health_check, index, metrics};
use crate::server::state::AppState;
use crate::tls::Credential;
use crate::utils::error::{ExporterError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::info;

/// Value of the `Server` response header
const SERVER_HEADER: &str = concat!("ravendb-exporter/", env!("CARGO_PKG_VERSION"));

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Load the credential, build the RavenDB client and prepare the state.
    ///
    /// Fails when the credential cannot be loaded; the exporter must not
    /// serve without the transport it was asked to use.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let credential = Credential::load(&config.tls)?;
        let client = RavenDbClient::new(&config.ravendb, &credential)?;
        let scraper = Scraper::new(Arc::new(client), config.ravendb.concurrent_requests);

        Ok(Self::with_scraper(config, scraper))
    }

    /// Build the server around an existing scraper
    pub fn with_scraper(config: &Config, scraper: Scraper<RavenDbClient>) -> Self {
        Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), scraper),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let metrics_path = state.metrics_path().to_string();

        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health_check))
            .route(&metrics_path, web::get().to(metrics))
    }

    /// Start the HTTP server and run until it is stopped
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ExporterError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> ExporterError {
        if error.kind() == std::io::ErrorKind::AddrInUse {
            ExporterError::server(format!(
                "Address {} is already in use; pick another port with --port or PORT",
                bind_addr
            ))
        } else {
            ExporterError::server(format!("Failed to bind {}: {}", bind_addr, error))
        }
    }
}
