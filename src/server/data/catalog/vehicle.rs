use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::VehicleModel;

/// Data access for the vehicle catalog table
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new vehicle
    pub async fn create(&self, name: &str) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    /// Gets every vehicle ordered by ID
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a vehicle by ID, returning `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }
}
