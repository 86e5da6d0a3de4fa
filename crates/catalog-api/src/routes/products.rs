//! Product catalog routes.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use catalog_core::product::{ComposedProduct, ProductId};
use futures::StreamExt;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /products
async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ComposedProduct>>, ApiError> {
    let products: Vec<ComposedProduct> = state.aggregator.list_products().await?.collect().await;
    Ok(Json(products))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ComposedProduct>, ApiError> {
    let id: ProductId = raw_id.parse()?;
    let product = state.aggregator.get_product(id).await?;
    Ok(Json(product))
}

/// Returns the router for the product endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
}
