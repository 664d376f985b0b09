//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions & serialization.

use chrono::Utc;

use crate::model::{FavoriteModel, UserModel};

/// Create a mock user model with the given ID and placeholder name & email.
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        name: format!("User {}", id),
        email: format!("user{}@holonet.example", id),
    }
}

/// Create a mock favorite model referencing a single planet.
pub fn mock_planet_favorite_model(id: i32, user_id: i32, planet_id: i32) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        planet_id: Some(planet_id),
        character_id: None,
        vehicle_id: None,
        created_at: Utc::now().naive_utc(),
    }
}
