//! Shared test harness for the holonet workspace.
//!
//! Tests declare what they need with [`TestBuilder`] and receive a [`TestContext`] backed by
//! an in-memory SQLite database. Fixture helpers on the context insert users, catalog entries
//! and favorites directly through the entity crate, bypassing the repositories under test.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_USER_EMAIL, TEST_USER_ID, TEST_USER_NAME},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
