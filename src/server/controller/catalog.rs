use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CharacterDto, PlanetDto, VehicleDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

/// OpenAPI tag for planet endpoints
pub static PLANET_TAG: &str = "planet";
/// OpenAPI tag for character endpoints
pub static CHARACTER_TAG: &str = "character";
/// OpenAPI tag for vehicle endpoints
pub static VEHICLE_TAG: &str = "vehicle";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet ordered by ID", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
///
/// # Responses
/// - 200 (Success): Planet with the requested ID
/// - 404 (Not Found): No planet with the requested ID
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Every character ordered by ID", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).list_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db).get_character(id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// List all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Every vehicle ordered by ID", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = CatalogService::new(&state.db).list_vehicles().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Vehicle found", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = CatalogService::new(&state.db).get_vehicle(id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}
