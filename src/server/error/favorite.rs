use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::MessageDto, server::model::catalog::CatalogKind};

/// Errors raised when toggling favorites.
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// The user already favorited this entry.
    #[error("User ID {user_id} already has {kind} ID {id} in favorites")]
    AlreadyFavorite {
        /// User the favorite belongs to
        user_id: i32,
        /// Kind of the favorited entry
        kind: CatalogKind,
        /// ID of the favorited entry
        id: i32,
    },
    /// The user has not favorited this entry.
    #[error("User ID {user_id} does not have {kind} ID {id} in favorites")]
    NotFavorite {
        /// User the favorite would belong to
        user_id: i32,
        /// Kind of the entry
        kind: CatalogKind,
        /// ID of the entry
        id: i32,
    },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::AlreadyFavorite { kind, .. } => format!("{} already in favorite", kind),
            Self::NotFavorite { kind, .. } => format!("{} not in favorites", kind),
        };

        (StatusCode::BAD_REQUEST, Json(MessageDto { message })).into_response()
    }
}
