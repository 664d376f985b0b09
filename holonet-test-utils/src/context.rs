//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a
//! SQLite database and the acting user ID tests should pass to handlers and services.
//! The database is in-memory unless a connection pool was requested, in which case it is
//! a file in a temporary directory removed when the context is dropped.

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use tempfile::TempDir;

use crate::{constant::TEST_USER_ID, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// let planet = test.catalog().insert_planet("Tatooine").await?;
/// test.user().insert_favorite(test.acting_user_id, Some(planet.id), None, None).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// User ID requests are served on behalf of
    pub acting_user_id: i32,
    // Keeps the database file of a pooled context alive
    _db_dir: Option<TempDir>,
}

impl TestContext {
    /// Convert the database connection & acting user into any type that can be constructed
    /// from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holonet crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, i32)>,
    {
        T::from((self.db.clone(), self.acting_user_id))
    }

    /// Create a new test context with an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            acting_user_id: TEST_USER_ID,
            _db_dir: None,
        })
    }

    /// Create a new test context with an empty file-backed SQLite database shared by up to
    /// `max_connections` pooled connections.
    ///
    /// An in-memory database is bound to a single connection, so concurrent requests run
    /// one after another; this context lets them contend for the database like they do
    /// in production.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::IoError)` - Temporary directory could not be created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new_pooled(max_connections: u32) -> Result<Self, TestError> {
        let db_dir = TempDir::new()?;
        let url = format!(
            "sqlite://{}?mode=rwc",
            db_dir.path().join("holonet.db").display()
        );

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(TestContext {
            db,
            acting_user_id: TEST_USER_ID,
            _db_dir: Some(db_dir),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Apply every migration of the production [`Migrator`].
    ///
    /// Unlike tables generated from entities, this also creates the unique indexes
    /// guarding duplicate favorites.
    pub(crate) async fn with_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }
}
