use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{catalog::entry_exists, favorite::FavoriteRepository, user::UserRepository},
        error::{catalog::CatalogError, favorite::FavoriteError, user::UserError, Error},
        model::{catalog::CatalogKind, db::FavoriteModel},
    },
};

/// Service for reading & toggling a user's favorites.
///
/// Every operation takes the acting user's ID explicitly; the service never assumes
/// which user a request is made for.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the favorites of a user, oldest first
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Favorites of the user, possibly empty
    /// - `Err(Error::UserError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(UserError::NotFound(user_id).into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(favorite_dto).collect())
    }

    /// Adds a catalog entry to a user's favorites
    ///
    /// The existence checks run first, then a single insert. Concurrent requests for the
    /// same pair may all pass the checks; the unique index on the favorite table lets only
    /// one insert through and the others report the same conflict as a sequential repeat.
    ///
    /// # Arguments
    /// - `user_id` - ID of the acting user
    /// - `kind` - Kind of catalog entry to favorite
    /// - `entry_id` - ID of the catalog entry
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::UserError)` - No user with this ID
    /// - `Err(Error::CatalogError)` - No catalog entry of `kind` with this ID
    /// - `Err(Error::FavoriteError)` - The entry is already in the user's favorites
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entry_id: i32,
    ) -> Result<FavoriteDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(UserError::NotFound(user_id).into());
        }

        if !entry_exists(self.db, kind, entry_id).await? {
            return Err(CatalogError::NotFound { kind, id: entry_id }.into());
        }

        if FavoriteRepository::new(self.db)
            .find_by_user_and_entry(user_id, kind, entry_id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::AlreadyFavorite {
                user_id,
                kind,
                id: entry_id,
            }
            .into());
        }

        let favorite = insert_favorite(self.db, user_id, kind, entry_id).await?;

        tracing::info!(
            user_id = %user_id,
            kind = %kind,
            entry_id = %entry_id,
            "Added favorite"
        );

        Ok(favorite_dto(favorite))
    }

    /// Removes a catalog entry from a user's favorites
    ///
    /// A single delete keyed on the user & entry decides the outcome: no affected rows means
    /// the entry was not a favorite.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(Error::FavoriteError)` - The entry is not in the user's favorites
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entry_id: i32,
    ) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db)
            .delete_by_user_and_entry(user_id, kind, entry_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFavorite {
                user_id,
                kind,
                id: entry_id,
            }
            .into());
        }

        tracing::info!(
            user_id = %user_id,
            kind = %kind,
            entry_id = %entry_id,
            "Removed favorite"
        );

        Ok(())
    }
}

/// Inserts a favorite, reporting a duplicate pair rejected by the unique index as
/// [`FavoriteError::AlreadyFavorite`].
async fn insert_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    kind: CatalogKind,
    entry_id: i32,
) -> Result<FavoriteModel, Error> {
    match FavoriteRepository::new(db)
        .create(user_id, kind, entry_id)
        .await
    {
        Ok(favorite) => Ok(favorite),
        Err(err) if is_unique_violation(&err) => Err(FavoriteError::AlreadyFavorite {
            user_id,
            kind,
            id: entry_id,
        }
        .into()),
        Err(err) => Err(err.into()),
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn favorite_dto(favorite: FavoriteModel) -> FavoriteDto {
    FavoriteDto {
        id: favorite.id,
        user_id: favorite.user_id,
        planet_id: favorite.planet_id,
        character_id: favorite.character_id,
        vehicle_id: favorite.vehicle_id,
    }
}
