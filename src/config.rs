//! Environment-driven database configuration.
//!
//! The library never reads the environment on its own; callers construct a
//! [`DatabaseConfig`] explicitly or via [`DatabaseConfig::from_env`] and use
//! it to build the pool shared by the `PostgreSQL` adapters.

use crate::task::adapters::postgres::TaskPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_DATABASE_URL";

/// Environment variable holding the maximum pool size.
pub const MAX_CONNECTIONS_VAR: &str = "TASKBOARD_DB_MAX_CONNECTIONS";

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// A variable holds an unusable value.
    #[error("invalid value '{value}' for {name}")]
    Invalid {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Settings for the `PostgreSQL` connection pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Pool size used when none is configured.
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

    /// Creates a configuration with the default pool size.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the URL is unset and
    /// [`ConfigError::Invalid`] when the pool size is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`DatabaseConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let max_connections = match lookup(MAX_CONNECTIONS_VAR) {
            None => Self::DEFAULT_MAX_CONNECTIONS,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::Invalid {
                    name: MAX_CONNECTIONS_VAR,
                    value: raw,
                })?,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Builds the r2d2 connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when no connection can be established.
    pub fn build_pool(&self) -> Result<TaskPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_connections)
            .build(manager)?;
        tracing::debug!(max_connections = self.max_connections, "built database pool");
        Ok(pool)
    }
}
