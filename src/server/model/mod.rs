//! Server application models and type definitions.
//!
//! This module contains the application state shared with handlers, database model type
//! aliases and the catalog kind used to route favorite operations to the right column.

pub mod app;
pub mod catalog;
pub mod db;
