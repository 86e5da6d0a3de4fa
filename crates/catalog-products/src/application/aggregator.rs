//! The aggregator: base lookup, enrichment fan-out/join, composition.
//!
//! Every configured enrichment client is called concurrently for a product
//! and all calls are awaited before composing, so per-product latency is
//! bounded by the slowest upstream rather than the sum of them.

use std::fmt;
use std::sync::Arc;

use catalog_core::enrichment::{EnrichmentClient, EnrichmentKind};
use catalog_core::error::CatalogError;
use catalog_core::product::{BaseProduct, ComposedProduct, ProductId};
use catalog_core::store::ProductStore;
use futures::future::join_all;
use futures::stream::{self, Stream, StreamExt};

use crate::domain::composition::{EnrichmentOutcome, compose};

/// Default number of products enriched concurrently while listing.
pub const DEFAULT_LIST_CONCURRENCY: usize = 16;

/// Composes base products from the store with the configured enrichments.
///
/// Holds no per-request state; one instance is shared by all requests.
pub struct Aggregator {
    store: Arc<dyn ProductStore>,
    enrichments: Vec<Arc<dyn EnrichmentClient>>,
    list_concurrency: usize,
}

impl Aggregator {
    /// Create an aggregator over `store` with zero or more enrichment clients.
    #[must_use]
    pub fn new(store: Arc<dyn ProductStore>, enrichments: Vec<Arc<dyn EnrichmentClient>>) -> Self {
        Self {
            store,
            enrichments,
            list_concurrency: DEFAULT_LIST_CONCURRENCY,
        }
    }

    /// Limit how many products are enriched at once while listing.
    /// Values below one are treated as one.
    #[must_use]
    pub fn with_list_concurrency(mut self, limit: usize) -> Self {
        self.list_concurrency = limit.max(1);
        self
    }

    /// The upstreams this aggregator calls, in configuration order.
    #[must_use]
    pub fn enrichment_kinds(&self) -> Vec<EnrichmentKind> {
        self.enrichments.iter().map(|client| client.kind()).collect()
    }

    /// Lists every product in store order, each enriched.
    ///
    /// The store is queried once per call; the returned stream then enriches
    /// products lazily, overlapping enrichment of up to `list_concurrency`
    /// products while still yielding them in store order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::StoreUnavailable` if the store cannot be read.
    pub async fn list_products(
        &self,
    ) -> Result<impl Stream<Item = ComposedProduct> + Send + '_, CatalogError> {
        let products = self.store.find_all().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to list base products");
        })?;
        tracing::debug!(count = products.len(), "loaded base products");

        Ok(stream::iter(products)
            .map(move |product| self.enrich(product))
            .buffered(self.list_concurrency))
    }

    /// Looks up one product and enriches it.
    ///
    /// No enrichment call is made unless the base product exists. Enrichment
    /// failures only remove fields; they never fail the lookup.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the store has no such product.
    /// Returns `CatalogError::StoreUnavailable` if the store cannot be read.
    #[tracing::instrument(skip_all, fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<ComposedProduct, CatalogError> {
        let product = self.store.find_by_id(id).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to load base product");
        })?;
        let Some(product) = product else {
            return Err(CatalogError::NotFound(id));
        };
        Ok(self.enrich(product).await)
    }

    async fn enrich(&self, product: BaseProduct) -> ComposedProduct {
        let id = product.id;
        let outcomes = join_all(self.enrichments.iter().map(|client| async move {
            EnrichmentOutcome {
                kind: client.kind(),
                result: client.fetch(id).await,
            }
        }))
        .await;
        compose(product, outcomes)
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("enrichments", &self.enrichment_kinds())
            .field("list_concurrency", &self.list_concurrency)
            .finish_non_exhaustive()
    }
}
