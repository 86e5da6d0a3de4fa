//! Rating service client.

use std::time::Duration;

use async_trait::async_trait;
use catalog_core::enrichment::{
    EnrichmentClient, EnrichmentError, EnrichmentKind, EnrichmentValue,
};
use catalog_core::product::ProductId;
use serde::Deserialize;

use crate::http::{UpstreamError, UpstreamHttp};

#[derive(Deserialize)]
struct RatingResponse {
    product_id: i64,
    value: i32,
}

/// HTTP client for the rating service: `GET {endpoint}/product/{id}`.
#[derive(Debug, Clone)]
pub struct RatingClient {
    http: UpstreamHttp,
}

impl RatingClient {
    /// Create a rating client.
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
impl EnrichmentClient for RatingClient {
    fn kind(&self) -> EnrichmentKind {
        EnrichmentKind::Rating
    }

    #[tracing::instrument(name = "rating.fetch", skip_all, fields(product_id = %id))]
    async fn fetch(&self, id: ProductId) -> Result<EnrichmentValue, EnrichmentError> {
        let body: RatingResponse = self.http.get_json(&format!("/product/{id}")).await?;
        if body.product_id != id.0 {
            return Err(EnrichmentError::Decode(format!(
                "rating is for product {}, expected {id}",
                body.product_id
            )));
        }
        Ok(EnrichmentValue::Rating { value: body.value })
    }
}
