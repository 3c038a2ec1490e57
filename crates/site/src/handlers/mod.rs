//! HTTP handlers for the Folio site.
//!
//! Page handlers render HTML through [`render`]; health endpoints return
//! JSON.

pub mod contact;
pub mod health;
pub mod pages;
mod render;

pub use health::{api_health, health_check};
