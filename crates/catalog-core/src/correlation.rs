//! Correlation identifiers scoped over one request's unit of work.
//!
//! The gateway middleware enters a scope per inbound request; upstream
//! clients read the current value to stamp outgoing calls.

use std::fmt;
use std::future::Future;

use uuid::Uuid;

/// Header carrying the correlation identifier on inbound and outbound calls.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Opaque identifier tying together all work done for one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Wrap an identifier received from a caller.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

tokio::task_local! {
    static CURRENT: CorrelationId;
}

/// Run `future` with `id` as the current correlation identifier.
pub async fn scope<F>(id: CorrelationId, future: F) -> F::Output
where
    F: Future,
{
    CURRENT.scope(id, future).await
}

/// The correlation identifier of the enclosing scope, if any.
#[must_use]
pub fn current() -> Option<CorrelationId> {
    CURRENT.try_with(Clone::clone).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_is_none_outside_scope() {
        assert_eq!(current(), None);
    }

    #[tokio::test]
    async fn test_scope_exposes_id_to_nested_futures() {
        let id = CorrelationId::new("req-7");

        let seen = scope(id.clone(), async { current() }).await;

        assert_eq!(seen, Some(id));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(CorrelationId::generate(), CorrelationId::generate());
    }
}
