//! Central module for application-wide configuration settings.
//!
//! This module handles loading the store connection string, the listen
//! address and the connection pool limits from the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";
pub const CONNECT_TIMEOUT_VAR: &str = "DB_CONNECT_TIMEOUT_SECS";
pub const MAX_CONNECTIONS_VAR: &str = "DB_MAX_CONNECTIONS";

const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([127, 0, 0, 1], 8000);
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store URL that selects the in-memory store instead of PostgreSQL.
pub const MEMORY_STORE_URL: &str = "memory://";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub connect_timeout: Duration,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let bind_address = parse_or(&lookup, BIND_ADDRESS_VAR, SocketAddr::from(DEFAULT_BIND_ADDRESS))?;
        let timeout_secs = parse_or(&lookup, CONNECT_TIMEOUT_VAR, DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let max_connections = parse_or(&lookup, MAX_CONNECTIONS_VAR, DEFAULT_MAX_CONNECTIONS)?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: MAX_CONNECTIONS_VAR,
                value: max_connections.to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_address,
            connect_timeout: Duration::from_secs(timeout_secs),
            max_connections,
        })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_STORE_URL
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
