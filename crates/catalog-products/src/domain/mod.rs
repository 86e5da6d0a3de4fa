//! Domain layer: composition policy.

pub mod composition;
