//! Catalog Upstream — HTTP clients for the enrichment services.
//!
//! Each client implements `EnrichmentClient`, carries its own request
//! timeout, and forwards the request's trace context and correlation id.

pub mod http;
pub mod pricing;
pub mod rating;

pub use http::UpstreamError;
pub use pricing::PricingClient;
pub use rating::RatingClient;
