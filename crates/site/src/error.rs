//! Error types for the Folio site server.
//!
//! `AppError` implements `IntoResponse` so handlers can return
//! `AppResult<T>` and bubble failures up with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level errors for the site.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Not found error
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Fixture file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                self.to_string()
            }
            AppError::Migration(e) => {
                tracing::error!(error = %e, "Migration error");
                self.to_string()
            }
            AppError::NotFound(msg) => msg.clone(),
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "Configuration error");
                msg.clone()
            }
            AppError::Serialization(e) => {
                tracing::error!(error = %e, "Serialization error");
                self.to_string()
            }
            AppError::Template(msg) => {
                tracing::error!(error = %msg, "Template error");
                msg.clone()
            }
            AppError::Io(e) => {
                tracing::error!(error = %e, "I/O error");
                self.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}
