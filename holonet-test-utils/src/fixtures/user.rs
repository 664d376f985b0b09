use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, name: &str, email: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a favorite row as-is.
    ///
    /// No shape checks are made, so rows referencing several catalog entries (or none)
    /// can be created to exercise how readers cope with them.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        character_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                character_id: ActiveValue::Set(character_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Counts every favorite row stored for the user.
    pub async fn count_favorites(&self, user_id: i32) -> Result<usize, TestError> {
        use sea_orm::{ColumnTrait, QueryFilter};

        let favorites = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(&self.setup.db)
            .await?;

        Ok(favorites.len())
    }
}
