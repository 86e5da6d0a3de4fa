//! Gateway telemetry setup.

pub use catalog_telemetry::Telemetry;

use crate::error::AppError;

const SERVICE_NAME: &str = "catalog-api";

/// Install JSON logs, span recording and the W3C propagator for the gateway.
/// Spans are exported only when `otlp_endpoint` is set.
///
/// # Errors
///
/// Returns `AppError::Telemetry` if the exporter cannot be built or a global
/// subscriber is already installed.
pub fn init(otlp_endpoint: Option<&str>) -> Result<Telemetry, AppError> {
    Ok(catalog_telemetry::init(SERVICE_NAME, otlp_endpoint)?)
}
