//! Service layer for the Folio site.
//!
//! Services turn request parameters into template contexts. They
//! hold the filtering and pagination policy; handlers only deal with
//! HTTP and rendering.

pub mod contact;
pub mod content;

pub use contact::{ContactService, Submission};
pub use content::{ContentService, IndexContext};
