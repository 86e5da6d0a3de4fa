//! Product catalog gateway — HTTP surface over the aggregator.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with tracing and correlation layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::products::router())
        .layer(axum::middleware::from_fn(middleware::correlate))
        .layer(TraceLayer::new_for_http().make_span_with(catalog_telemetry::request_span))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
