//! Test enrichment clients — scriptable `EnrichmentClient` for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use catalog_core::enrichment::{
    EnrichmentClient, EnrichmentError, EnrichmentKind, EnrichmentValue,
};
use catalog_core::product::ProductId;

/// One recorded `fetch` call.
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    /// The product the call was made for.
    pub product_id: ProductId,
    /// When the call started.
    pub started_at: Instant,
    /// When the call resolved.
    pub finished_at: Instant,
}

/// An enrichment client whose answers are scripted per product id.
///
/// Ids without a scripted answer get the fallback, which defaults to
/// `EnrichmentError::Status(404)`. Every call is recorded with its start
/// and finish instants, and an optional delay simulates a slow upstream.
#[derive(Debug)]
pub struct StubEnrichmentClient {
    kind: EnrichmentKind,
    answers: HashMap<ProductId, Result<EnrichmentValue, EnrichmentError>>,
    fallback: Result<EnrichmentValue, EnrichmentError>,
    delay: Option<Duration>,
    invocations: Mutex<Vec<Invocation>>,
}

impl StubEnrichmentClient {
    /// A client of `kind` with no scripted answers.
    #[must_use]
    pub fn new(kind: EnrichmentKind) -> Self {
        Self {
            kind,
            answers: HashMap::new(),
            fallback: Err(EnrichmentError::Status(404)),
            delay: None,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// A pricing client that returns `amount` for every product.
    #[must_use]
    pub fn price(amount: f64) -> Self {
        Self::new(EnrichmentKind::Pricing).otherwise(Ok(EnrichmentValue::Price { amount }))
    }

    /// A rating client that returns `value` for every product.
    #[must_use]
    pub fn rating(value: i32) -> Self {
        Self::new(EnrichmentKind::Rating).otherwise(Ok(EnrichmentValue::Rating { value }))
    }

    /// A client of `kind` that fails every call with `error`.
    #[must_use]
    pub fn failing(kind: EnrichmentKind, error: EnrichmentError) -> Self {
        Self::new(kind).otherwise(Err(error))
    }

    /// Script the answer for one product id.
    #[must_use]
    pub fn respond(
        mut self,
        id: i64,
        answer: Result<EnrichmentValue, EnrichmentError>,
    ) -> Self {
        self.answers.insert(ProductId(id), answer);
        self
    }

    /// Set the answer for ids without a scripted one.
    #[must_use]
    pub fn otherwise(mut self, answer: Result<EnrichmentValue, EnrichmentError>) -> Self {
        self.fallback = answer;
        self
    }

    /// Sleep for `delay` before answering each call.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Snapshot of all calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl EnrichmentClient for StubEnrichmentClient {
    fn kind(&self) -> EnrichmentKind {
        self.kind
    }

    async fn fetch(&self, id: ProductId) -> Result<EnrichmentValue, EnrichmentError> {
        let started_at = Instant::now();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let answer = self
            .answers
            .get(&id)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone());
        self.invocations.lock().unwrap().push(Invocation {
            product_id: id,
            started_at,
            finished_at: Instant::now(),
        });
        answer
    }
}
