//! Catalog gateway — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::CatalogError;
use catalog_upstream::UpstreamError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// An enrichment client could not be constructed.
    #[error("upstream client error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Tracing or span export could not be initialized.
    #[error("telemetry error: {0}")]
    Telemetry(#[from] catalog_telemetry::TelemetryError),
}

/// JSON body returned for server error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `CatalogError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            CatalogError::InvalidIdentifier(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
            }
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            CatalogError::StoreUnavailable(_) => {
                let body = ErrorBody {
                    error: "store_unavailable",
                    message: "the product store is unavailable".to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
