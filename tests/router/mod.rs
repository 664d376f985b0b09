//! Tests driving the full router, including path extraction & the acting user extractor.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use holonet::server::router::routes;
use holonet_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    routes().with_state(test.into_app_state())
}

async fn send(app: &Router, method: Method, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Expect the record for a valid ID and 404 for an absent one
#[tokio::test]
async fn get_planet_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Tatooine")
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/planets/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"id": 1, "name": "Tatooine"}));

    let resp = send(&app, Method::GET, "/planets/2").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "Planet not found"}));

    Ok(())
}

/// Expect non-integer path IDs to be rejected before reaching a handler
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/vehicles/falcon").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect favorites to be routed to the configured acting user rather than the ID path
#[tokio::test]
async fn user_favorites_route_is_not_a_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/users/favorites").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let resp = send(&app, Method::GET, "/users/1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect POST twice to yield 200 then 400, and DELETE to remove the favorite from the list
#[tokio::test]
async fn favorite_planet_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Hoth")
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::DELETE, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Planet not in favorites"})
    );

    let resp = send(&app, Method::POST, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::POST, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Planet already in favorite"})
    );

    let resp = send(&app, Method::GET, "/users/favorites").await;
    let favorites = body_json(resp).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));
    assert_eq!(favorites[0]["planet_id"], json!(1));

    let resp = send(&app, Method::DELETE, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Favorite removed successfully"})
    );

    let resp = send(&app, Method::GET, "/users/favorites").await;
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect favorites to be written for the acting user configured in the state
#[tokio::test]
async fn favorites_follow_configured_acting_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_user("Leia Organa", "leia@alderaan.example")
        .with_vehicle("Tantive IV")
        .build()
        .await?;
    let other_user_id = TEST_USER_ID + 1;
    let mut state = test.into_app_state();
    state.acting_user_id = other_user_id;
    let app = routes().with_state(state);

    let resp = send(&app, Method::POST, "/favorite/vehicle/1").await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(test.user().count_favorites(other_user_id).await?, 1);
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 0);

    Ok(())
}

/// Expect the sitemap to list every documented path
#[tokio::test]
async fn sitemap_lists_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let endpoints: Vec<&str> = body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e.as_str())
        .collect();

    for path in [
        "/planets",
        "/planets/{id}",
        "/characters",
        "/characters/{id}",
        "/vehicles",
        "/vehicles/{id}",
        "/users",
        "/users/{id}",
        "/users/favorites",
        "/favorite/planet/{id}",
        "/favorite/character/{id}",
        "/favorite/vehicle/{id}",
    ] {
        assert!(endpoints.contains(&path), "missing {}", path);
    }

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], json!("Holonet"));

    Ok(())
}
