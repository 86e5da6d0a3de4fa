//! Enrichment composition policy.
//!
//! Successful enrichments fill their field; failed ones leave it absent.
//! A failed enrichment never fails the product.

use catalog_core::enrichment::{EnrichmentError, EnrichmentKind, EnrichmentValue};
use catalog_core::product::{BaseProduct, ComposedProduct};

/// Settled result of one enrichment call.
#[derive(Debug, Clone)]
pub struct EnrichmentOutcome {
    /// The upstream that was called.
    pub kind: EnrichmentKind,
    /// What it answered.
    pub result: Result<EnrichmentValue, EnrichmentError>,
}

/// Merge `base` with every successful outcome.
///
/// Failures are logged at `warn` with the upstream name and failure class
/// and otherwise dropped. A value whose kind does not match the client that
/// produced it is discarded rather than written to another upstream's field.
#[must_use]
pub fn compose(base: BaseProduct, outcomes: Vec<EnrichmentOutcome>) -> ComposedProduct {
    let mut composed = ComposedProduct::from(base);
    for outcome in outcomes {
        match outcome.result {
            Ok(value) if value.kind() == outcome.kind => composed.apply(value),
            Ok(value) => {
                tracing::warn!(
                    upstream = %outcome.kind,
                    product_id = %composed.id,
                    returned = %value.kind(),
                    "enrichment returned a value for another upstream; dropping it"
                );
            }
            Err(err) => {
                tracing::warn!(
                    upstream = %outcome.kind,
                    product_id = %composed.id,
                    failure = err.kind(),
                    error = %err,
                    "enrichment unavailable; omitting field"
                );
            }
        }
    }
    composed
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use catalog_core::enrichment::{EnrichmentError, EnrichmentKind, EnrichmentValue};
    use catalog_core::product::{BaseProduct, ComposedProduct, ProductId};
    use catalog_test_support::product;

    use super::{EnrichmentOutcome, compose};

    /// Writer that appends formatted log lines to a shared buffer.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn compose_capturing_logs(
        base: BaseProduct,
        outcomes: Vec<EnrichmentOutcome>,
    ) -> (ComposedProduct, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        let composed = tracing::subscriber::with_default(subscriber, || compose(base, outcomes));

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        (composed, logs)
    }

    fn price(amount: f64) -> EnrichmentOutcome {
        EnrichmentOutcome {
            kind: EnrichmentKind::Pricing,
            result: Ok(EnrichmentValue::Price { amount }),
        }
    }

    fn rating(value: i32) -> EnrichmentOutcome {
        EnrichmentOutcome {
            kind: EnrichmentKind::Rating,
            result: Ok(EnrichmentValue::Rating { value }),
        }
    }

    fn failed(kind: EnrichmentKind, error: EnrichmentError) -> EnrichmentOutcome {
        EnrichmentOutcome {
            kind,
            result: Err(error),
        }
    }

    #[test]
    fn test_compose_with_no_outcomes_keeps_base_fields_only() {
        let composed = compose(product(1, "Widget", "A widget"), vec![]);

        assert_eq!(composed.id, ProductId(1));
        assert_eq!(composed.name, "Widget");
        assert_eq!(composed.description, "A widget");
        assert_eq!(composed.price, None);
        assert_eq!(composed.rating, None);
    }

    #[test]
    fn test_compose_fills_every_successful_field() {
        let composed = compose(product(1, "Widget", "A widget"), vec![price(9.99), rating(4)]);

        assert_eq!(composed.price, Some(9.99));
        assert_eq!(composed.rating, Some(4));
    }

    #[test]
    fn test_compose_omits_failed_field_without_default() {
        let composed = compose(
            product(1, "Widget", "A widget"),
            vec![price(9.99), failed(EnrichmentKind::Rating, EnrichmentError::Timeout)],
        );

        assert_eq!(composed.price, Some(9.99));
        assert_eq!(composed.rating, None);
    }

    #[test]
    fn test_compose_with_all_failures_keeps_base_fields() {
        let composed = compose(
            product(2, "Gadget", "A gadget"),
            vec![
                failed(EnrichmentKind::Pricing, EnrichmentError::Status(503)),
                failed(
                    EnrichmentKind::Rating,
                    EnrichmentError::Transport("connection refused".into()),
                ),
            ],
        );

        assert_eq!(composed.name, "Gadget");
        assert_eq!(composed.price, None);
        assert_eq!(composed.rating, None);
    }

    #[test]
    fn test_compose_drops_value_of_mismatched_kind() {
        let mismatched = EnrichmentOutcome {
            kind: EnrichmentKind::Pricing,
            result: Ok(EnrichmentValue::Rating { value: 5 }),
        };

        let composed = compose(product(1, "Widget", "A widget"), vec![mismatched]);

        assert_eq!(composed.price, None);
        assert_eq!(composed.rating, None);
    }

    #[test]
    fn test_compose_logs_timed_out_enrichment_at_warn() {
        let (composed, logs) = compose_capturing_logs(
            product(1, "Widget", "A widget"),
            vec![price(9.99), failed(EnrichmentKind::Rating, EnrichmentError::Timeout)],
        );

        assert_eq!(composed.rating, None);
        assert_eq!(logs.lines().count(), 1);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("upstream=rating"), "{logs}");
        assert!(logs.contains("product_id=1"), "{logs}");
        assert!(logs.contains("failure=\"timeout\""), "{logs}");
    }

    #[test]
    fn test_compose_logs_failure_class_of_each_failed_upstream() {
        let (_, logs) = compose_capturing_logs(
            product(2, "Gadget", "A gadget"),
            vec![
                failed(EnrichmentKind::Pricing, EnrichmentError::Status(503)),
                failed(
                    EnrichmentKind::Rating,
                    EnrichmentError::Transport("connection refused".into()),
                ),
            ],
        );

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("upstream=pricing"), "{logs}");
        assert!(lines[0].contains("failure=\"status\""), "{logs}");
        assert!(lines[1].contains("upstream=rating"), "{logs}");
        assert!(lines[1].contains("failure=\"transport\""), "{logs}");
        assert!(lines.iter().all(|line| line.contains("product_id=2")));
    }

    #[test]
    fn test_compose_logs_nothing_when_every_enrichment_succeeds() {
        let (_, logs) =
            compose_capturing_logs(product(1, "Widget", "A widget"), vec![price(9.99), rating(4)]);

        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn test_compose_logs_dropped_value_of_mismatched_kind() {
        let mismatched = EnrichmentOutcome {
            kind: EnrichmentKind::Pricing,
            result: Ok(EnrichmentValue::Rating { value: 5 }),
        };

        let (_, logs) = compose_capturing_logs(product(1, "Widget", "A widget"), vec![mismatched]);

        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("upstream=pricing"), "{logs}");
        assert!(logs.contains("returned=rating"), "{logs}");
    }
}
