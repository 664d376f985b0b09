use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_user::User, m20251017_000002_planet::Planet,
    m20251017_000003_character::Character, m20251017_000004_vehicle::Vehicle,
};

static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static FK_FAVORITE_PLANET_ID: &str = "fk_favorite_planet_id";
static FK_FAVORITE_CHARACTER_ID: &str = "fk_favorite_character_id";
static FK_FAVORITE_VEHICLE_ID: &str = "fk_favorite_vehicle_id";

static IDX_FAVORITE_USER_PLANET: &str = "idx_favorite_user_id_planet_id";
static IDX_FAVORITE_USER_CHARACTER: &str = "idx_favorite_user_id_character_id";
static IDX_FAVORITE_USER_VEHICLE: &str = "idx_favorite_user_id_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can also be created on SQLite,
        // which does not support adding constraints with ALTER TABLE.
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::PlanetId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::VehicleId))
                    .col(timestamp(Favorite::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_PLANET_ID)
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_ID)
                            .from(Favorite::Table, Favorite::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_ID)
                            .from(Favorite::Table, Favorite::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL never collides with NULL in a unique index, so a row favoriting a planet
        // does not conflict with the same user's character or vehicle rows.
        for (name, column) in [
            (IDX_FAVORITE_USER_PLANET, Favorite::PlanetId),
            (IDX_FAVORITE_USER_CHARACTER, Favorite::CharacterId),
            (IDX_FAVORITE_USER_VEHICLE, Favorite::VehicleId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorite::Table)
                        .col(Favorite::UserId)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_FAVORITE_USER_VEHICLE,
            IDX_FAVORITE_USER_CHARACTER,
            IDX_FAVORITE_USER_PLANET,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Favorite::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
    VehicleId,
    CreatedAt,
}
