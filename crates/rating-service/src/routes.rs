//! HTTP routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::repository::{RatingError, RatingRepository};

/// Shared state for the rating routes.
pub type SharedRepository = Arc<dyn RatingRepository>;

/// GET /product/{id}
#[tracing::instrument(name = "rating.by_product", skip_all, fields(product_id = %raw_id))]
async fn rating_by_product(
    State(repo): State<SharedRepository>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(product_id) = raw_id.parse::<i64>() else {
        return (StatusCode::BAD_REQUEST, "invalid parameter").into_response();
    };
    match repo.rating_by_product_id(product_id).await {
        Ok(rating) => Json(rating).into_response(),
        Err(RatingError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "rating not found").into_response()
        }
    }
}

/// Returns the rating service router.
pub fn router(repo: SharedRepository) -> Router {
    Router::new()
        .route("/product/{id}", get(rating_by_product))
        .with_state(repo)
}

/// The rating router with one span per request, parented on the caller's
/// trace context.
pub fn app(repo: SharedRepository) -> Router {
    router(repo)
        .layer(TraceLayer::new_for_http().make_span_with(catalog_telemetry::request_span))
}
