//! PostgreSQL settings for `FOLIO_STORE=postgres`.

use std::time::Duration;

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::error::AppResult;

/// Connection settings read from `POSTGRES_*` variables.
///
/// `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PASSWORD`,
/// `POSTGRES_DATABASE`, `POSTGRES_MAX_CONNECTIONS` and
/// `POSTGRES_ACQUIRE_TIMEOUT` (seconds).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_name")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_name")]
    pub database: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    "folio".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("POSTGRES_").from_iter(vars)?)
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout)
    }

    /// Connection URL with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        let password = if self.password.is_empty() { "" } else { "***" };
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_name(),
            password: String::new(),
            database: default_name(),
            max_connections: default_max_connections(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}
