//! Folio Site Library
//!
//! Server for a small portfolio website:
//!
//! - **Home page**: active testimonials, certificates, blog posts and
//!   portfolio items in one view
//! - **Portfolio and blog**: paginated listings (10 per page) and detail pages
//! - **Contact form**: validated submissions stored as contact messages
//!
//! Content is managed outside this application; the site only reads it
//! and only ever shows rows flagged `is_active` in listings.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from environment variables
//! - [`db`]: Storage trait, PostgreSQL and in-memory backends, models
//! - [`services`]: View logic producing template contexts
//! - [`pagination`]: Page-number pagination policy
//! - [`handlers`]: HTTP route handlers
//! - [`template`]: Embedded page templates
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use folio_site::{config::AppConfig, db::MemoryStore, routes::build_router, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let state = AppState::new(Arc::new(MemoryStore::default()), AppConfig::default())?;
//!     let app = build_router(state);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod pagination;
pub mod result_ext;
pub mod routes;
pub mod services;
pub mod state;
pub mod template;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
