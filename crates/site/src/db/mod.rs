//! Database module for the Folio site.
//!
//! Content is read through the [`ContentStore`] trait so views work the
//! same against PostgreSQL ([`PgStore`]) and the in-process
//! [`MemoryStore`] used for local preview and tests.

pub mod memory;
pub mod models;
pub mod pool;
pub mod postgres;
pub mod queries;
pub mod store;

pub use memory::{Fixtures, MemoryStore};
pub use pool::{create_pool, DbPool};
pub use postgres::PgStore;
pub use store::ContentStore;
