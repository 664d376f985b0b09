//! HTTP controller endpoints for the holonet web API.
//!
//! This module contains Axum handlers for the catalog, users and favorites. Controllers
//! extract path parameters & the acting user, call into the service layer and return JSON
//! responses. Every handler is annotated with utoipa for OpenAPI documentation.

pub mod catalog;
pub mod favorite;
pub mod user;
pub mod util;
