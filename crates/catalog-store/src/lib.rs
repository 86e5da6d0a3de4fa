//! Catalog Store — PostgreSQL persistence for base product records.

pub mod pg_product_store;
