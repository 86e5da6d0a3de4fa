//! Rating service — serves per-product customer ratings.

pub mod repository;
pub mod routes;
