use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// ID of the user favorites are read & written for
    pub acting_user_id: i32,
}

impl From<(DatabaseConnection, i32)> for AppState {
    fn from((db, acting_user_id): (DatabaseConnection, i32)) -> Self {
        Self { db, acting_user_id }
    }
}
