//! Database queries for the Folio site.
//!
//! This module contains database query functions organized by domain.

pub mod contact;
pub mod content;

/// `LIMIT`/`OFFSET` bind value. Saturates instead of wrapping negative.
pub(crate) fn sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
