//! Product store abstraction.

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::product::{BaseProduct, ProductId};

/// Read-only access to base product records.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Load every product, in the store's iteration order.
    async fn find_all(&self) -> Result<Vec<BaseProduct>, CatalogError>;

    /// Load one product. `Ok(None)` means the store was reachable but has no
    /// such record.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<BaseProduct>, CatalogError>;
}
