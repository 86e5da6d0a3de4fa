//! Rating service entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use rating_service::repository::InMemoryRatingRepository;
use rating_service::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let telemetry = catalog_telemetry::init("rating-service", otlp_endpoint.as_deref())?;

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "1323".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    let app = routes::app(Arc::new(InMemoryRatingRepository::seeded()));

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Rating service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    tracing::info!("Rating service stopped");
    telemetry.shutdown();

    Ok(())
}
