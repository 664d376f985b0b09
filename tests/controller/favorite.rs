//! Tests for the favorite toggle endpoints.
//!
//! Tests relying on duplicate rejection at the database level build the schema through
//! migrations so the unique favorite indexes exist.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::{
    favorite::{
        add_favorite_character, add_favorite_planet, add_favorite_vehicle,
        remove_favorite_character, remove_favorite_planet, remove_favorite_vehicle,
    },
    user::get_user_favorites,
    util::acting_user::ActingUser,
};
use serde_json::json;

use super::*;

/// Expect 200 with a success message and a stored favorite
#[tokio::test]
async fn add_planet_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = add_favorite_planet(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Favorite added successfully"})
    );
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);

    Ok(())
}

/// Expect the second identical request to be rejected with 400
#[tokio::test]
async fn add_planet_twice_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Tatooine")
        .build()
        .await?;

    let first = add_favorite_planet(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();
    let second = add_favorite_planet(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(second).await,
        json!({"message": "Planet already in favorite"})
    );
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);

    Ok(())
}

/// Expect 404 when favoriting a catalog entry that does not exist
#[tokio::test]
async fn add_character_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .build()
        .await?;

    let resp = add_favorite_character(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(7),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"error": "Character not found"})
    );
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 0);

    Ok(())
}

/// Expect 404 when the acting user does not exist
#[tokio::test]
async fn add_vehicle_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_vehicle("X-wing")
        .build()
        .await?;

    let resp = add_favorite_vehicle(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"error": "User not found"}));

    Ok(())
}

/// Expect 400 when removing an entry that is not a favorite
#[tokio::test]
async fn remove_planet_not_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Tatooine")
        .build()
        .await?;

    let resp = remove_favorite_planet(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Planet not in favorites"})
    );

    Ok(())
}

/// Expect 200 and the row gone when removing an existing favorite
#[tokio::test]
async fn remove_vehicle_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_vehicle("Snowspeeder")
        .build()
        .await?;
    test.user()
        .insert_favorite(TEST_USER_ID, None, None, Some(1))
        .await?;

    let resp = remove_favorite_vehicle(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"message": "Favorite removed successfully"})
    );
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 0);

    Ok(())
}

/// Expect removal of one kind to leave a favorite with the same ID of another kind intact
#[tokio::test]
async fn remove_character_leaves_other_kinds_intact() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Dagobah")
        .with_character("Yoda")
        .build()
        .await?;
    test.user()
        .insert_favorite(TEST_USER_ID, Some(1), None, None)
        .await?;
    test.user()
        .insert_favorite(TEST_USER_ID, None, Some(1), None)
        .await?;

    let resp = remove_favorite_character(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);

    let resp = remove_favorite_character(
        State(test.into_app_state()),
        ActingUser(TEST_USER_ID),
        Path(1),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a favorite to appear exactly once in the list after adding and vanish after removal
#[tokio::test]
async fn add_list_remove_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_character("Obi-Wan Kenobi")
        .build()
        .await?;
    let state = test.into_app_state();

    let resp = add_favorite_character(State(state.clone()), ActingUser(TEST_USER_ID), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_user_favorites(State(state.clone()), ActingUser(TEST_USER_ID))
        .await
        .into_response();
    let favorites = body_json(resp).await;
    let favorites = favorites.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["character_id"], json!(1));
    assert_eq!(favorites[0]["planet_id"], json!(null));
    assert_eq!(favorites[0]["vehicle_id"], json!(null));

    let resp = remove_favorite_character(State(state.clone()), ActingUser(TEST_USER_ID), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_user_favorites(State(state), ActingUser(TEST_USER_ID))
        .await
        .into_response();
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect exactly one of several overlapping identical requests to succeed and the rest to
/// be rejected as duplicates
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_adds_store_one_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_connection_pool(8)
        .with_migrations()
        .with_acting_user()
        .with_planet("Alderaan")
        .build()
        .await?;
    let state = test.into_app_state();

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                let resp = add_favorite_planet(State(state), ActingUser(TEST_USER_ID), Path(1))
                    .await
                    .into_response();
                let status = resp.status();

                (status, body_json(resp).await)
            })
        })
        .collect();

    let mut responses = Vec::new();
    for handle in handles {
        responses.push(handle.await.unwrap());
    }

    let added = responses
        .iter()
        .filter(|(status, _)| *status == StatusCode::OK)
        .count();
    assert_eq!(added, 1);

    for (status, body) in responses.iter().filter(|(status, _)| *status != StatusCode::OK) {
        assert_eq!(*status, StatusCode::BAD_REQUEST);
        assert_eq!(*body, json!({"message": "Planet already in favorite"}));
    }
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);

    Ok(())
}
