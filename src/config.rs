//! Service configuration loaded from the environment

use std::net::SocketAddr;

use thiserror::Error;

use crate::store::DatabaseConfig;

/// Bind address used when `ORDER_TOOLS_BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddr(String),
}

/// Runtime configuration of the order tools server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP surface listens on
    pub bind_addr: SocketAddr,

    /// PostgreSQL settings; `None` selects the in-memory store
    pub database: Option<DatabaseConfig>,
}

impl ServiceConfig {
    /// Read `ORDER_TOOLS_BIND_ADDR` and `DATABASE_URL` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("ORDER_TOOLS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig::from_connection_string(url.trim()))
            .transpose()?;

        Ok(Self { bind_addr, database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_url() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://app:secret@db:5433/orders"),
            ("ORDER_TOOLS_BIND_ADDR", "0.0.0.0:8080"),
        ]))
        .unwrap();

        let database = config.database.unwrap();
        assert_eq!(database.host, "db");
        assert_eq!(database.port, 5433);
        assert_eq!(database.database, "orders");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_blank_database_url_uses_memory_store() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("ORDER_TOOLS_BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBindAddr("nowhere".to_string()));

        let err = ServiceConfig::from_lookup(lookup_from(&[("DATABASE_URL", "mysql://x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConnectionString(_)));
    }
}
