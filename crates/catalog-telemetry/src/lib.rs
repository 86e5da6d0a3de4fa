//! Telemetry shared by the catalog gateway and the rating service.
//!
//! Both binaries install the same pipeline: JSON logs filtered by `RUST_LOG`,
//! an OpenTelemetry tracer bridged through `tracing-opentelemetry`, and a
//! composite W3C TraceContext + Baggage propagator. Spans are always recorded
//! so inbound trace context reaches outbound calls; export happens only when
//! an OTLP endpoint is configured.

pub mod pipeline;
pub mod request;

pub use pipeline::{Telemetry, TelemetryError, init, propagator, tracer_provider};
pub use request::{HeaderExtractor, request_span};
