use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
        model::db::UserModel,
    },
};

/// Service for reading user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user ordered by ID
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(user_dto).collect())
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::UserError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user_dto(user))
    }
}

fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}
