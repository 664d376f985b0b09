use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised when reading users.
#[derive(Error, Debug)]
pub enum UserError {
    /// No user has the requested ID.
    #[error("User ID {0:?} not found")]
    NotFound(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
