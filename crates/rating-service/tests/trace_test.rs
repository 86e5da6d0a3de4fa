//! Tracing of rating lookups with the service's telemetry installed.

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog_telemetry::Telemetry;
use opentelemetry::trace::TraceContextExt;
use rating_service::repository::{InMemoryRatingRepository, Rating, RatingError, RatingRepository};
use rating_service::routes;
use tower::ServiceExt;
use tracing_opentelemetry::OpenTelemetrySpanExt;

const TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";
const TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

static TELEMETRY: OnceLock<Telemetry> = OnceLock::new();

/// Seeded repository that records the trace id active during each lookup.
#[derive(Default)]
struct TraceRecordingRepository {
    inner: InMemoryRatingRepository,
    trace_ids: Mutex<Vec<String>>,
}

#[async_trait]
impl RatingRepository for TraceRecordingRepository {
    async fn rating_by_product_id(&self, product_id: i64) -> Result<Rating, RatingError> {
        let cx = tracing::Span::current().context();
        self.trace_ids
            .lock()
            .unwrap()
            .push(cx.span().span_context().trace_id().to_string());
        self.inner.rating_by_product_id(product_id).await
    }
}

async fn get_traced(uri: &str, traceparent: Option<&str>) -> (StatusCode, Vec<String>) {
    TELEMETRY.get_or_init(|| catalog_telemetry::init("rating-service", None).unwrap());

    let repo = Arc::new(TraceRecordingRepository {
        inner: InMemoryRatingRepository::seeded(),
        ..TraceRecordingRepository::default()
    });
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(traceparent) = traceparent {
        builder = builder.header("traceparent", traceparent);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = routes::app(repo.clone()).oneshot(request).await.unwrap();
    let trace_ids = repo.trace_ids.lock().unwrap().clone();
    (response.status(), trace_ids)
}

#[tokio::test]
async fn test_lookup_span_is_parented_on_inbound_traceparent() {
    let (status, trace_ids) = get_traced("/product/1", Some(TRACEPARENT)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(trace_ids, vec![TRACE_ID.to_owned()]);
}

#[tokio::test]
async fn test_lookup_without_traceparent_starts_a_new_trace() {
    let (status, trace_ids) = get_traced("/product/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_ids.len(), 1);
    assert_ne!(trace_ids[0], TRACE_ID);
    assert_ne!(trace_ids[0], "00000000000000000000000000000000");
}
