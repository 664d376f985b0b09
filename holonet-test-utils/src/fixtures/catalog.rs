use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
