//! Configuration management for the Contacts API.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the Contacts API.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx database URL (SQLite)
    pub database_url: String,

    /// Debug mode (default: false)
    pub debug: bool,

    /// Address the HTTP server listens on (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Database pool size (default: 5)
    pub max_connections: u32,

    /// Request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Default log filter (default: "debug" in debug mode, "info" otherwise)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DATABASE_URL`: sqlx SQLite URL, e.g. `sqlite:contacts.db?mode=rwc`
    ///
    /// Optional environment variables:
    /// - `DEBUG`: `True` to enable debug mode (default: False)
    /// - `BIND_ADDR`: Listen address (default: 127.0.0.1:5000)
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `REQUEST_TIMEOUT`: Request timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "debug" if DEBUG, else "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Build the configuration from the process environment only.
    fn from_process_env() -> ConfigResult<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_URL".to_string(),
                reason: "Must start with sqlite:".to_string(),
            });
        }

        let debug = Self::parse_env_bool("DEBUG", false);

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:5000, got: {}", val),
            })?,
            Err(_) => Self::default_bind_addr(),
        };

        let max_connections = Self::parse_env_u32("DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string());

        Ok(Config {
            database_url,
            debug,
            bind_addr,
            max_connections,
            request_timeout,
            log_level,
        })
    }

    fn default_bind_addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 5000))
    }

    /// Parse an environment variable as a flag. Accepts `True`, `true` and `1`.
    fn parse_env_bool(var_name: &str, default: bool) -> bool {
        match env::var(var_name) {
            Ok(val) => matches!(val.trim(), "True" | "true" | "TRUE" | "1"),
            Err(_) => default,
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            debug: false,
            bind_addr: Self::default_bind_addr(),
            max_connections: 5,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
