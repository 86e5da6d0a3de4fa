//! Product catalog — aggregation core.
//!
//! Responsible for loading base products from the store, fanning out to
//! every configured enrichment upstream, and composing the best available
//! response when some of those upstreams fail.

pub mod application;
pub mod domain;
