use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        controller::util::acting_user::ActingUser,
        error::Error,
        model::{app::AppState, catalog::CatalogKind},
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorite toggle endpoints
pub static FAVORITE_TAG: &str = "favorite";

async fn add(
    state: &AppState,
    user_id: i32,
    kind: CatalogKind,
    id: i32,
) -> Result<MessageDto, Error> {
    FavoriteService::new(&state.db)
        .add_favorite(user_id, kind, id)
        .await?;

    Ok(MessageDto {
        message: "Favorite added successfully".to_string(),
    })
}

async fn remove(
    state: &AppState,
    user_id: i32,
    kind: CatalogKind,
    id: i32,
) -> Result<MessageDto, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, kind, id)
        .await?;

    Ok(MessageDto {
        message: "Favorite removed successfully".to_string(),
    })
}

/// Add a planet to the acting user's favorites
///
/// # Responses
/// - 200 (Success): Planet added to favorites
/// - 400 (Bad Request): Planet is already in the user's favorites
/// - 404 (Not Found): Planet or acting user does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Planet already in favorite", body = MessageDto),
        (status = 404, description = "Planet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = add(&state, user_id, CatalogKind::Planet, id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Remove a planet from the acting user's favorites
///
/// # Responses
/// - 200 (Success): Planet removed from favorites
/// - 400 (Bad Request): Planet is not in the user's favorites
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Planet not in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = remove(&state, user_id, CatalogKind::Planet, id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Add a character to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Character already in favorite", body = MessageDto),
        (status = 404, description = "Character or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = add(&state, user_id, CatalogKind::Character, id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Remove a character from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Character not in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = remove(&state, user_id, CatalogKind::Character, id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Add a vehicle to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Vehicle already in favorite", body = MessageDto),
        (status = 404, description = "Vehicle or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = add(&state, user_id, CatalogKind::Vehicle, id).await?;

    Ok((StatusCode::OK, Json(message)))
}

/// Remove a vehicle from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Vehicle not in favorites", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    ActingUser(user_id): ActingUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = remove(&state, user_id, CatalogKind::Vehicle, id).await?;

    Ok((StatusCode::OK, Json(message)))
}
