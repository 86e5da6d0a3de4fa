//! Request correlation.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use catalog_core::correlation::{self, CORRELATION_ID_HEADER, CorrelationId};
use tracing::Span;

/// Scope the request's correlation id over the handler and echo it back.
///
/// The caller's `x-correlation-id` is reused when present; otherwise a new
/// one is generated.
pub async fn correlate(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(CorrelationId::generate, |v| CorrelationId::new(v.to_owned()));
    Span::current().record("correlation_id", id.as_str());

    let mut response = correlation::scope(id.clone(), next.run(request)).await;
    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }
    response
}
