//! Database model type aliases.
//!
//! Short names for the sea-orm models of the entity crate, used by repositories and
//! services so signatures read in domain terms.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `email` - Unique email address
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for favorite database model.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the user owning the favorite
/// - `planet_id` - Foreign key to a favorited planet (nullable)
/// - `character_id` - Foreign key to a favorited character (nullable)
/// - `vehicle_id` - Foreign key to a favorited vehicle (nullable)
/// - `created_at` - Timestamp when the favorite was added
pub type FavoriteModel = entity::favorite::Model;
