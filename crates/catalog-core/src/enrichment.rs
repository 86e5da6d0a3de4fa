//! Enrichment abstraction: values fetched from upstream services.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::product::ProductId;

/// Which upstream an enrichment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrichmentKind {
    /// The pricing service.
    Pricing,
    /// The rating service.
    Rating,
}

impl EnrichmentKind {
    /// Stable name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for EnrichmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value returned by one upstream for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnrichmentValue {
    /// Current price.
    Price {
        /// Price amount.
        amount: f64,
    },
    /// Aggregate customer rating.
    Rating {
        /// Rating value.
        value: i32,
    },
}

impl EnrichmentValue {
    /// The upstream kind that produces this value.
    #[must_use]
    pub fn kind(&self) -> EnrichmentKind {
        match self {
            Self::Price { .. } => EnrichmentKind::Pricing,
            Self::Rating { .. } => EnrichmentKind::Rating,
        }
    }
}

/// Failure of a single enrichment call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    /// The call did not complete within the client's deadline.
    #[error("upstream call timed out")]
    Timeout,

    /// The upstream could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// The upstream body could not be decoded.
    #[error("invalid upstream response: {0}")]
    Decode(String),
}

impl EnrichmentError {
    /// Short failure class for structured logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

/// A client for one enrichment upstream.
///
/// Implementations own their timeout and any retry policy; the aggregator
/// calls `fetch` exactly once per product per request.
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    /// The upstream this client talks to.
    fn kind(&self) -> EnrichmentKind;

    /// Fetch this upstream's value for `id`.
    async fn fetch(&self, id: ProductId) -> Result<EnrichmentValue, EnrichmentError>;
}
