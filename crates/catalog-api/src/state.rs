//! Shared application state.

use std::sync::Arc;

use catalog_products::application::aggregator::Aggregator;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The aggregator serving every product request.
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}
