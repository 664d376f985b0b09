//! Service layer for business logic.
//!
//! Services turn repository results into response DTOs and typed errors: missing records
//! become `NotFound` errors and favorite toggles enforce the one-row-per-entry rule.

pub mod catalog;
pub mod favorite;
pub mod user;
