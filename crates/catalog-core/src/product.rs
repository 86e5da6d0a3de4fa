//! Product model: identifiers, base records and composed responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enrichment::EnrichmentValue;
use crate::error::CatalogError;

/// Identifier assigned to a product by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.parse::<i64>()
            .map(ProductId)
            .map_err(|_| CatalogError::InvalidIdentifier(raw.to_owned()))
    }
}

/// The catalog's own record for an item, as held by the product store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseProduct {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

/// A base product merged with whichever enrichments succeeded for one request.
///
/// An enrichment field is `Some` only when that upstream answered for this
/// product; failures leave it `None` and it is omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedProduct {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price reported by the pricing upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Rating reported by the rating upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
}

impl ComposedProduct {
    /// Sets the field that corresponds to `value`.
    pub fn apply(&mut self, value: EnrichmentValue) {
        match value {
            EnrichmentValue::Price { amount } => self.price = Some(amount),
            EnrichmentValue::Rating { value } => self.rating = Some(value),
        }
    }
}

impl From<BaseProduct> for ComposedProduct {
    fn from(base: BaseProduct) -> Self {
        Self {
            id: base.id,
            name: base.name,
            description: base.description,
            price: None,
            rating: None,
        }
    }
}
