//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! Swagger UI is served at `/api/docs` and a sitemap of every documented path at `/`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /planets`, `GET /planets/{id}`
/// - `GET /characters`, `GET /characters/{id}`
/// - `GET /vehicles`, `GET /vehicles/{id}`
/// - `GET /users`, `GET /users/{id}`, `GET /users/favorites`
/// - `POST` & `DELETE` `/favorite/planet/{id}`, `/favorite/character/{id}`,
///   `/favorite/vehicle/{id}`
/// - `GET /` - Sitemap listing every path above
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, state is attached by the caller.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, acting_user_id: 1 };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet catalog & favorites API"), tags(
        (name = controller::catalog::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::catalog::CHARACTER_TAG, description = "Character catalog routes"),
        (name = controller::catalog::VEHICLE_TAG, description = "Vehicle catalog routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite toggle routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_characters))
        .routes(routes!(controller::catalog::get_character))
        .routes(routes!(controller::catalog::get_vehicles))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_vehicle,
            controller::favorite::remove_favorite_vehicle
        ))
        .split_for_parts();

    let endpoints: Vec<String> = api.paths.paths.keys().cloned().collect();

    routes
        .route(
            "/",
            get(move || {
                let endpoints = endpoints.clone();
                async move { Json(SitemapDto { endpoints }) }
            }),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
