//! Pricing service client.

use std::time::Duration;

use async_trait::async_trait;
use catalog_core::enrichment::{
    EnrichmentClient, EnrichmentError, EnrichmentKind, EnrichmentValue,
};
use catalog_core::product::ProductId;
use serde::Deserialize;

use crate::http::{UpstreamError, UpstreamHttp};

#[derive(Deserialize)]
struct PriceResponse {
    price: f64,
}

/// HTTP client for the pricing service: `GET {endpoint}/product/{id}`.
#[derive(Debug, Clone)]
pub struct PricingClient {
    http: UpstreamHttp,
}

impl PricingClient {
    /// Create a pricing client.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` if the endpoint is empty or the HTTP client
    /// cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        Ok(Self {
            http: UpstreamHttp::new(endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl EnrichmentClient for PricingClient {
    fn kind(&self) -> EnrichmentKind {
        EnrichmentKind::Pricing
    }

    #[tracing::instrument(name = "pricing.fetch", skip_all, fields(product_id = %id))]
    async fn fetch(&self, id: ProductId) -> Result<EnrichmentValue, EnrichmentError> {
        let body: PriceResponse = self.http.get_json(&format!("/product/{id}")).await?;
        Ok(EnrichmentValue::Price { amount: body.price })
    }
}
