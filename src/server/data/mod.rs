//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one entity each. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against the connection pool or inside
//! a transaction opened by a service.

pub mod catalog;
pub mod favorite;
pub mod user;
