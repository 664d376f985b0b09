use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::catalog::CatalogKind};

/// Errors raised when reading catalog entries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No catalog entry of `kind` has the requested ID.
    #[error("{kind} ID {id} not found")]
    NotFound {
        /// Kind of entry that was looked up
        kind: CatalogKind,
        /// Requested ID
        id: i32,
    },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { kind, id } => {
                tracing::debug!(kind = %kind, id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", kind),
                    }),
                )
                    .into_response()
            }
        }
    }
}
