use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{catalog::CatalogKind, db::FavoriteModel};

/// Data access for the favorite table, keyed by user & catalog entry
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking a user to a single catalog entry
    ///
    /// Only the column matching `kind` is set, the other two reference columns stay `NULL`.
    /// When the schema carries the unique `(user_id, <column>)` indexes, inserting a pair
    /// that already exists fails with [`sea_orm::SqlErr::UniqueConstraintViolation`].
    ///
    /// # Arguments
    /// - `user_id` - ID of the user the favorite belongs to
    /// - `kind` - Kind of catalog entry being favorited
    /// - `entry_id` - ID of the catalog entry
    pub async fn create(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entry_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let mut favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match kind {
            CatalogKind::Planet => favorite.planet_id = ActiveValue::Set(Some(entry_id)),
            CatalogKind::Character => favorite.character_id = ActiveValue::Set(Some(entry_id)),
            CatalogKind::Vehicle => favorite.vehicle_id = ActiveValue::Set(Some(entry_id)),
        }

        favorite.insert(self.db).await
    }

    /// Gets all favorites of a user, oldest first
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::CreatedAt)
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the favorite linking a user to a catalog entry
    pub async fn find_by_user_and_entry(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entry_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(kind.favorite_column().eq(entry_id))
            .one(self.db)
            .await
    }

    /// Deletes the favorite linking a user to a catalog entry
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_user_and_entry(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entry_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(kind.favorite_column().eq(entry_id))
            .exec(self.db)
            .await
    }
}
