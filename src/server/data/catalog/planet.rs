use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::PlanetModel;

/// Data access for the planet catalog table
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, name: &str) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Gets every planet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID, returning `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }
}
