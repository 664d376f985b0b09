use serde::{Deserialize, Serialize};

/// A catalog entry marked as liked by a user.
///
/// Exactly one of `planet_id`, `character_id` & `vehicle_id` is set for favorites created
/// through the API, the others serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}
