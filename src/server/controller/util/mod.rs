//! Utilities for controller request handling.
//!
//! This module provides request extractors shared across controllers.

pub mod acting_user;
