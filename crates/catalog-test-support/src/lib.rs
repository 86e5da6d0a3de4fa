//! Shared test mocks and utilities for the product catalog gateway.

mod enrichment;
mod store;

pub use enrichment::{Invocation, StubEnrichmentClient};
pub use store::{FailingProductStore, InMemoryProductStore};

use catalog_core::product::{BaseProduct, ProductId};

/// Build a base product with the given fields.
#[must_use]
pub fn product(id: i64, name: &str, description: &str) -> BaseProduct {
    BaseProduct {
        id: ProductId(id),
        name: name.to_owned(),
        description: description.to_owned(),
    }
}
