//! Holonet: a catalog of planets, characters & vehicles with per-user favorites.
//!
//! The crate is split into [`model`], the JSON shapes returned to API consumers, and
//! [`server`], the axum application serving them from a sea-orm database.

pub mod model;
pub mod server;
