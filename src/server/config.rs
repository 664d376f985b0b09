use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
/// Address bound when `HOST` is not set.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;
/// User favorites are served for when `ACTING_USER_ID` is not set.
pub const DEFAULT_ACTING_USER_ID: i32 = 1;

/// Runtime configuration read from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// sea-orm connection URL, postgres or sqlite
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
    /// ID of the user favorites are read & written for
    pub acting_user_id: i32,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every set variable parsed successfully
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` or `ACTING_USER_ID` failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            acting_user_id: parse_var(&lookup, "ACTING_USER_ID", DEFAULT_ACTING_USER_ID)?,
        })
    }

    /// `host:port` pair for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("{:?}: {}", value, e),
            }),
    }
}
