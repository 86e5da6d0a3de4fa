//! Rating storage.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A product's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    /// Product the rating belongs to.
    pub product_id: i64,
    /// Rating value.
    pub value: i32,
}

/// Errors returned by rating lookups.
#[derive(Debug, Error)]
pub enum RatingError {
    /// No rating is recorded for the product.
    #[error("there is no rating for product {0}")]
    NotFound(i64),
}

/// Lookup of ratings by product.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Returns the rating for `product_id`.
    async fn rating_by_product_id(&self, product_id: i64) -> Result<Rating, RatingError>;
}

/// Ratings held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingRepository {
    ratings: HashMap<i64, Rating>,
}

impl InMemoryRatingRepository {
    /// Repository holding exactly `ratings`.
    #[must_use]
    pub fn new(ratings: impl IntoIterator<Item = Rating>) -> Self {
        Self {
            ratings: ratings.into_iter().map(|r| (r.product_id, r)).collect(),
        }
    }

    /// Repository with the demo catalog's ratings.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new([
            Rating { product_id: 1, value: 4 },
            Rating { product_id: 2, value: 3 },
            Rating { product_id: 3, value: 5 },
        ])
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    #[tracing::instrument(name = "repository.rating_by_product_id", skip(self))]
    async fn rating_by_product_id(&self, product_id: i64) -> Result<Rating, RatingError> {
        self.ratings
            .get(&product_id)
            .copied()
            .ok_or(RatingError::NotFound(product_id))
    }
}
