//! Service configuration from environment variables (optionally seeded from `.env`).
//! Every setting has a fixed default, so the service starts with no environment at all.

use crate::error::StartupError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/items";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Which storage backend serves the `items` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Process-local storage; contents are lost on exit.
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = StartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(StartupError::Config(format!(
                "invalid ITEMS_STORE: {} (expected postgres or memory)",
                s
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub store: StoreConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = listen
            .parse()
            .map_err(|e| StartupError::Config(format!("invalid LISTEN_ADDR {}: {}", listen, e)))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(StartupError::Config(format!(
                        "invalid DATABASE_MAX_CONNECTIONS: {}",
                        v
                    )))
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let kind = match lookup("ITEMS_STORE") {
            Some(v) => v.parse()?,
            None => StoreKind::Postgres,
        };

        Ok(Self {
            listen_addr,
            store: StoreConfig {
                kind,
                database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
                max_connections,
            },
        })
    }
}
