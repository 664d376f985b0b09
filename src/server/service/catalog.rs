use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, PlanetDto, VehicleDto},
    server::{
        data::catalog::{
            character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository,
        },
        error::{catalog::CatalogError, Error},
        model::catalog::CatalogKind,
    },
};

/// Service for reading the planet, character & vehicle catalog.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet ordered by ID
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets
            .into_iter()
            .map(|p| PlanetDto {
                id: p.id,
                name: p.name,
            })
            .collect())
    }

    /// Gets a planet by ID
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::CatalogError)` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Planet,
                id: planet_id,
            })?;

        Ok(PlanetDto {
            id: planet.id,
            name: planet.name,
        })
    }

    /// Lists every character ordered by ID
    pub async fn list_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters
            .into_iter()
            .map(|c| CharacterDto {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Gets a character by ID, see [`get_planet`](Self::get_planet)
    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Character,
                id: character_id,
            })?;

        Ok(CharacterDto {
            id: character.id,
            name: character.name,
        })
    }

    /// Lists every vehicle ordered by ID
    pub async fn list_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles
            .into_iter()
            .map(|v| VehicleDto {
                id: v.id,
                name: v.name,
            })
            .collect())
    }

    /// Gets a vehicle by ID, see [`get_planet`](Self::get_planet)
    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        let vehicle = VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Vehicle,
                id: vehicle_id,
            })?;

        Ok(VehicleDto {
            id: vehicle.id,
            name: vehicle.name,
        })
    }
}
