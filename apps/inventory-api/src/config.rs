//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first, if present.

use std::env;
use std::time::Duration;

/// Default route prefix, matching the published API base path.
pub const DEFAULT_PREFIX: &str = "/inventory/v1";

/// Inventory API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Route prefix, normalised (leading `/`, no trailing `/`, may be empty)
    pub prefix: String,

    /// SQLite database file
    pub database_path: String,

    /// Connection pool size
    pub db_max_connections: u32,

    /// How long a request waits for a pooled connection
    pub db_acquire_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            prefix: DEFAULT_PREFIX.to_string(),
            database_path: "./inventory.db".to_string(),
            db_max_connections: 5,
            db_acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),

            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,

            prefix: normalize_prefix(
                &env::var("SERVER_ENDPOINT_PREFIX_V1").unwrap_or(defaults.prefix),
            ),

            database_path: env::var("DATABASE_PATH").unwrap_or(defaults.database_path),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| defaults.db_max_connections.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            db_acquire_timeout: match env::var("DB_ACQUIRE_TIMEOUT_SECS") {
                Ok(secs) => secs
                    .parse()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidValue("DB_ACQUIRE_TIMEOUT_SECS".to_string()))?,
                Err(_) => defaults.db_acquire_timeout,
            },
        };

        if config.database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("DATABASE_PATH".to_string()));
        }

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Normalises a route prefix: adds a leading `/`, strips trailing ones.
/// `""` and `"/"` both mean "no prefix".
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
