//! Runtime configuration, read from the environment after `.env` is loaded.

use anyhow::{Context, bail};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:7870";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;

/// Where bookings are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// `PostgreSQL` at the given connection URL
    Postgres { database_url: String },
    /// Process memory, lost on restart
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub server_address: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    pub store: StoreBackend,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_address =
            lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let store = match lookup("STORE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").context("database_url is missing in env")?,
            },
            "memory" => StoreBackend::Memory,
            other => bail!("unknown STORE_BACKEND: {other}"),
        };

        Ok(Self {
            server_address,
            max_connections,
            store,
        })
    }
}
