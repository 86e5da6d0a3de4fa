//! Test stores — mock `ProductStore` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_core::error::CatalogError;
use catalog_core::product::{BaseProduct, ProductId};
use catalog_core::store::ProductStore;

/// A store backed by a fixed list of products. Iteration order is the order
/// the products were given in. Counts `find_all` calls so tests can assert
/// that each listing re-queries the store.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: Vec<BaseProduct>,
    list_calls: AtomicUsize,
}

impl InMemoryProductStore {
    /// Create a store holding `products`.
    #[must_use]
    pub fn new(products: Vec<BaseProduct>) -> Self {
        Self {
            products,
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `find_all` calls made so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<BaseProduct>, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<BaseProduct>, CatalogError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

/// A store that always reports itself unreachable. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingProductStore;

#[async_trait]
impl ProductStore for FailingProductStore {
    async fn find_all(&self) -> Result<Vec<BaseProduct>, CatalogError> {
        Err(CatalogError::StoreUnavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<BaseProduct>, CatalogError> {
        Err(CatalogError::StoreUnavailable("connection refused".into()))
    }
}
