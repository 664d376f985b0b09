use holonet::server::{
    error::{catalog::CatalogError, favorite::FavoriteError, user::UserError, Error},
    model::catalog::CatalogKind,
    service::favorite::FavoriteService,
};

use super::*;

/// Expect the favorite to be created with only the matching reference set
#[tokio::test]
async fn creates_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_vehicle("AT-AT")
        .build()
        .await?;

    let favorite = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Vehicle, 1)
        .await
        .unwrap();

    assert_eq!(favorite.user_id, TEST_USER_ID);
    assert_eq!(favorite.planet_id, None);
    assert_eq!(favorite.character_id, None);
    assert_eq!(favorite.vehicle_id, Some(1));

    Ok(())
}

/// Expect an already favorite error for an existing pair
#[tokio::test]
async fn rejects_existing_pair() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_planet("Endor")
        .build()
        .await?;
    test.user()
        .insert_favorite(TEST_USER_ID, Some(1), None, None)
        .await?;

    let result = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Planet, 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AlreadyFavorite {
            kind: CatalogKind::Planet,
            id: 1,
            ..
        }))
    ));
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);

    Ok(())
}

/// Expect another user's favorite of the same entry not to conflict
#[tokio::test]
async fn allows_same_entry_for_different_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .with_user("Han Solo", "han@corellia.example")
        .with_planet("Endor")
        .build()
        .await?;
    let other_user_id = TEST_USER_ID + 1;
    test.user()
        .insert_favorite(other_user_id, Some(1), None, None)
        .await?;

    let result = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Planet, 1)
        .await;

    assert!(result.is_ok());
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 1);
    assert_eq!(test.user().count_favorites(other_user_id).await?, 1);

    Ok(())
}

/// Expect a catalog not found error instead of a foreign key failure
#[tokio::test]
async fn rejects_missing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_acting_user()
        .build()
        .await?;

    let result = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Character, 9)
        .await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::NotFound {
            kind: CatalogKind::Character,
            id: 9
        }))
    ));
    assert_eq!(test.user().count_favorites(TEST_USER_ID).await?, 0);

    Ok(())
}

/// Expect a user not found error when the user does not exist
#[tokio::test]
async fn rejects_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_planet("Jakku")
        .build()
        .await?;

    let result = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Planet, 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::NotFound(TEST_USER_ID)))
    ));

    Ok(())
}

/// Expect a database error when tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = FavoriteService::new(&test.db)
        .add_favorite(TEST_USER_ID, CatalogKind::Planet, 1)
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

/// Expect overlapping creates on a pooled database to end in one favorite per entry, with
/// every other request rejected as a duplicate rather than failing on lock contention
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_only_conflict() -> Result<(), TestError> {
    const PLANETS: i32 = 20;
    const REQUESTS_PER_PLANET: usize = 6;

    let mut builder = TestBuilder::new()
        .with_connection_pool(8)
        .with_migrations()
        .with_acting_user();
    for i in 1..=PLANETS {
        builder = builder.with_planet(format!("Planet {}", i));
    }
    let test = builder.build().await?;

    let mut handles = Vec::new();
    for planet_id in 1..=PLANETS {
        for _ in 0..REQUESTS_PER_PLANET {
            let db = test.db.clone();
            handles.push(tokio::spawn(async move {
                FavoriteService::new(&db)
                    .add_favorite(TEST_USER_ID, CatalogKind::Planet, planet_id)
                    .await
            }));
        }
    }

    let mut added = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(Error::FavoriteError(FavoriteError::AlreadyFavorite { .. })) => conflicts += 1,
            Err(err) => panic!("unexpected error: {}", err),
        }
    }

    assert_eq!(added, PLANETS as usize);
    assert_eq!(conflicts, PLANETS as usize * (REQUESTS_PER_PLANET - 1));
    assert_eq!(
        test.user().count_favorites(TEST_USER_ID).await?,
        PLANETS as usize
    );

    Ok(())
}
