use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::CharacterModel;

/// Data access for the character catalog table
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    pub async fn create(&self, name: &str) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a character by ID, returning `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(id).one(self.db).await
    }
}
