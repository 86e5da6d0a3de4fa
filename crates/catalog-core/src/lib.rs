//! Catalog Core — shared domain abstractions.
//!
//! This crate defines the product model, the collaborator traits the
//! aggregator is written against, and the error taxonomy. It contains no
//! infrastructure code.

pub mod correlation;
pub mod enrichment;
pub mod error;
pub mod product;
pub mod store;
