//! Application layer: request-level orchestration.

pub mod aggregator;
