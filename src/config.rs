//! Environment-driven configuration.

use crate::error::config::ConfigError;

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_sql_logging: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(max) => max,
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        let database_sql_logging = match lookup("DATABASE_SQL_LOGGING") {
            None => false,
            Some(value) => value.trim().parse::<bool>().map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "DATABASE_SQL_LOGGING".to_string(),
                    reason: e.to_string(),
                }
            })?,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            database_sql_logging,
        })
    }
}
