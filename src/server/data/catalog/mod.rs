//! Repositories for the read-only catalog: planets, characters & vehicles.

pub mod character;
pub mod planet;
pub mod vehicle;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::catalog::{
        character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository,
    },
    model::catalog::CatalogKind,
};

/// Returns whether a catalog entry of `kind` with `id` exists.
pub async fn entry_exists<C: ConnectionTrait>(
    db: &C,
    kind: CatalogKind,
    id: i32,
) -> Result<bool, DbErr> {
    let exists = match kind {
        CatalogKind::Planet => PlanetRepository::new(db).get_by_id(id).await?.is_some(),
        CatalogKind::Character => CharacterRepository::new(db).get_by_id(id).await?.is_some(),
        CatalogKind::Vehicle => VehicleRepository::new(db).get_by_id(id).await?.is_some(),
    };

    Ok(exists)
}
