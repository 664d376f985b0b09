//! Error types for the holonet server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (catalog lookups, users, favorites, configuration). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod catalog;
pub mod config;
pub mod favorite;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, config::ConfigError, favorite::FavoriteError, user::UserError,
    },
};

/// Main error type for the holonet server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog lookup error (planet, character or vehicle not found).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// User lookup error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Favorite toggle rejected (already present or absent).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Favorite already present or not present
/// - 404 Not Found - Missing catalog entry or user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error message, but returns a generic message to the client to avoid
/// leaking implementation details such as SQL statements.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
