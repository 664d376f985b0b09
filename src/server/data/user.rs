use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::UserModel;

/// Data access for the user table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation if `email` is already taken.
    pub async fn create(&self, name: &str, email: &str) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user by ID, returning `None` if it does not exist
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}
