//! Data transfer objects serialized in API responses.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
