//! Fixed values shared across tests.

/// ID of the acting user inserted by [`TestBuilder::with_acting_user`](crate::TestBuilder::with_acting_user).
///
/// Matches the first auto-increment ID SQLite hands out, so the acting user must be the
/// first row inserted into the `user` table.
pub const TEST_USER_ID: i32 = 1;

/// Name of the acting user.
pub static TEST_USER_NAME: &str = "Luke Skywalker";

/// Email of the acting user.
pub static TEST_USER_EMAIL: &str = "luke@tatooine.example";
