use std::fmt;

/// The kinds of catalog entries a user can favorite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    /// A planet
    Planet,
    /// A character
    Character,
    /// A vehicle
    Vehicle,
}

impl CatalogKind {
    /// Capitalized name used in response messages, e.g. `Planet`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
        }
    }

    /// Favorite table column referencing entries of this kind.
    pub fn favorite_column(&self) -> entity::favorite::Column {
        match self {
            Self::Planet => entity::favorite::Column::PlanetId,
            Self::Character => entity::favorite::Column::CharacterId,
            Self::Vehicle => entity::favorite::Column::VehicleId,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
