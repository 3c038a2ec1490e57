//! Application configuration for the Folio site server.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Which backend serves site content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// PostgreSQL via the `POSTGRES_*` settings.
    #[default]
    Postgres,
    /// In-process store, optionally seeded from `FOLIO_FIXTURES`.
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `FOLIO_`:
/// - `FOLIO_HOST`: Server bind address (default: "0.0.0.0")
/// - `FOLIO_PORT`: Server port (default: 8000)
/// - `FOLIO_DEBUG`: Enable debug mode (default: false)
/// - `FOLIO_SITE_NAME`: Title shown in page headers
/// - `FOLIO_STORE`: `postgres` or `memory` (default: postgres)
/// - `FOLIO_FIXTURES`: JSON fixture file loaded into the memory store
/// - `FOLIO_STATIC_DIR`: Directory served under `/static`
/// - `FOLIO_PAGE_SIZE`: Items per listing page (default: 10, 1 to 1000)
/// - `FOLIO_DETAIL_REQUIRE_ACTIVE`: Hide inactive rows from detail pages
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Site title
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Content backend
    #[serde(default)]
    pub store: StoreKind,

    /// Fixture file for the memory store
    #[serde(default)]
    pub fixtures: Option<String>,

    /// Static asset directory
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Listing page size
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Detail pages return 404 for inactive rows.
    ///
    /// Off by default: listings hide inactive rows but detail pages have
    /// always resolved any row by identifier.
    #[serde(default)]
    pub detail_require_active: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_site_name() -> String {
    "Folio".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `FOLIO_`.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: AppConfig = envy::prefixed("FOLIO_").from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(AppError::Config(format!(
                "FOLIO_PAGE_SIZE must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }
        Ok(())
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            site_name: default_site_name(),
            store: StoreKind::default(),
            fixtures: None,
            static_dir: default_static_dir(),
            page_size: default_page_size(),
            detail_require_active: false,
        }
    }
}
