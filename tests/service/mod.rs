//! Tests for the service layer.
//!
//! Services are exercised against an in-memory database, verifying both returned DTOs and
//! the typed errors mapped from missing rows.


use holonet_test_utils::prelude::*;
