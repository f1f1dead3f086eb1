//! HTTP route handlers

use crate::monitoring::{content_type, render};
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::error;

/// Landing page pointing at the metrics path
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let path = state.metrics_path();
    let body = format!(
        r#"<html>
<head><title>RavenDB Exporter</title></head>
<body>
<h1>RavenDB Exporter</h1>
<p><a href="{path}">Metrics</a></p>
</body>
</html>
"#
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Run a scrape and expose the result
pub async fn metrics(state: web::Data<AppState>) -> HttpResponse {
    let outcome = state.scraper.scrape().await;

    match render(&outcome) {
        Ok(body) => HttpResponse::Ok().content_type(content_type()).body(body),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            HttpResponse::InternalServerError().body(format!("Failed to render metrics: {}", e))
        }
    }
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
