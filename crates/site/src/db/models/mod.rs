//! Database models for the Folio site.
//!
//! This module contains SQLx-compatible model definitions
//! for all database tables.

pub mod contact;
pub mod content;

pub use contact::*;
pub use content::*;
