//! Test fixture modules for database record creation.
//!
//! - `catalog` - planets, characters & vehicles
//! - `factory` - in-memory models that never touch the database
//! - `user` - users & their favorites

pub mod catalog;
pub mod factory;
pub mod user;
