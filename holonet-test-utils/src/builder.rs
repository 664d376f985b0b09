//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{
    constant::{TEST_USER_EMAIL, TEST_USER_NAME},
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Database to connect to, in-memory when unset
    max_connections: Option<u32>,

    // Tables to create
    include_catalog_tables: bool,
    run_migrations: bool,

    // Database fixtures to insert
    include_acting_user: bool,
    users: Vec<(String, String)>, // (name, email)
    planets: Vec<String>,
    characters: Vec<String>,
    vehicles: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with an in-memory database and no tables or fixtures
    /// configured.
    pub fn new() -> Self {
        Self {
            max_connections: None,
            include_catalog_tables: false,
            run_migrations: false,
            include_acting_user: false,
            users: Vec::new(),
            planets: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Add every application table to the test database, generated from the entity crate.
    ///
    /// Creates User, Planet, Character, Vehicle and Favorite tables. Generated tables carry
    /// the foreign keys but not the unique favorite indexes; use
    /// [`with_migrations`](Self::with_migrations) when a test depends on those.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Build the schema by running the production migrations instead of generating tables
    /// from entities.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Back the test with a file-backed database and a pool of up to `max_connections`
    /// connections instead of a single in-memory connection.
    ///
    /// Use for tests where concurrent requests must actually overlap.
    pub fn with_connection_pool(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Insert the acting user, which receives [`TEST_USER_ID`](crate::constant::TEST_USER_ID).
    ///
    /// The acting user is always inserted before any user queued with
    /// [`with_user`](Self::with_user).
    pub fn with_acting_user(mut self) -> Self {
        self.include_acting_user = true;
        self
    }

    /// Insert an additional user.
    pub fn with_user(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.users.push((name.into(), email.into()));
        self
    }

    /// Insert a planet, IDs are assigned in insertion order starting at 1.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a character, IDs are assigned in insertion order starting at 1.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Insert a vehicle, IDs are assigned in insertion order starting at 1.
    pub fn with_vehicle(mut self, name: impl Into<String>) -> Self {
        self.vehicles.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Connects to the database and creates tables (migrations, then catalog tables)
    /// 2. Inserts users (acting user first)
    /// 3. Inserts planets, characters and vehicles
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::IoError)` - Temporary database directory could not be created
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = match self.max_connections {
            Some(max_connections) => TestContext::new_pooled(max_connections).await?,
            None => TestContext::new().await?,
        };

        // 1. Create tables
        if self.run_migrations {
            setup.with_migrations().await?;
        }

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::User),
                    schema.create_table_from_entity(entity::prelude::Planet),
                    schema.create_table_from_entity(entity::prelude::Character),
                    schema.create_table_from_entity(entity::prelude::Vehicle),
                    schema.create_table_from_entity(entity::prelude::Favorite),
                ])
                .await?;
        }

        // 2. Insert users
        if self.include_acting_user {
            setup
                .user()
                .insert_user(TEST_USER_NAME, TEST_USER_EMAIL)
                .await?;
        }

        for (name, email) in self.users {
            setup.user().insert_user(&name, &email).await?;
        }

        // 3. Insert catalog entries
        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        for name in self.characters {
            setup.catalog().insert_character(&name).await?;
        }

        for name in self.vehicles {
            setup.catalog().insert_vehicle(&name).await?;
        }

        Ok(setup)
    }
}
