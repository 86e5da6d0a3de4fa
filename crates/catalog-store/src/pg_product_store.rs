//! `PostgreSQL` implementation of the `ProductStore` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use catalog_core::error::CatalogError;
use catalog_core::product::{BaseProduct, ProductId};
use catalog_core::store::ProductStore;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
}

impl From<ProductRow> for BaseProduct {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

fn unavailable(err: &sqlx::Error) -> CatalogError {
    CatalogError::StoreUnavailable(err.to_string())
}

/// PostgreSQL-backed product store.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Creates a new `PgProductStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_all(&self) -> Result<Vec<BaseProduct>, CatalogError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT id, name, description FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| unavailable(&e))?;
        tracing::debug!(count = rows.len(), "loaded products");
        Ok(rows.into_iter().map(BaseProduct::from).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<BaseProduct>, CatalogError> {
        let row: Option<ProductRow> =
            sqlx::query_as("SELECT id, name, description FROM products WHERE id = $1")
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| unavailable(&e))?;
        Ok(row.map(BaseProduct::from))
    }
}
