use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
