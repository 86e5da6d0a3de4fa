//! Product catalog gateway entry point.

use std::error::Error;
use std::sync::Arc;

use catalog_api::config::CatalogConfig;
use catalog_api::state::AppState;
use catalog_api::{build_router, telemetry};
use catalog_products::application::aggregator::Aggregator;
use catalog_store::pg_product_store::PgProductStore;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = CatalogConfig::from_env()?;
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting product catalog gateway");

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    // Wire the aggregator with whichever upstreams are configured.
    let aggregator = Aggregator::new(
        Arc::new(PgProductStore::new(pool)),
        config.enrichment_clients()?,
    )
    .with_list_concurrency(config.list_concurrency);
    tracing::info!(enrichments = ?aggregator.enrichment_kinds(), "aggregator ready");

    let app = build_router(AppState::new(aggregator));

    // Start server.
    let addr = config.listen_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await?;

    tracing::info!("Product catalog gateway stopped");
    telemetry.shutdown();

    Ok(())
}
