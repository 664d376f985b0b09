use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::util::acting_user::ActingUser,
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

/// OpenAPI tag for user endpoints
pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get the favorites of the acting user
///
/// Favorites are returned oldest first. Each favorite references exactly one planet,
/// character or vehicle, the other two references are `null`.
///
/// # Responses
/// - 200 (Success): Favorites of the acting user, possibly empty
/// - 404 (Not Found): The configured acting user does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorites of the acting user", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}
