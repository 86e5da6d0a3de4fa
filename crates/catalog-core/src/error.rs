//! Domain error types.

use thiserror::Error;

use crate::product::ProductId;

/// Top-level catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A path parameter could not be parsed as a product identifier.
    #[error("{0} is not a valid ID")]
    InvalidIdentifier(String),

    /// The store was reachable but holds no product with this identifier.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The base product store could not be reached.
    #[error("product store unavailable: {0}")]
    StoreUnavailable(String),
}
