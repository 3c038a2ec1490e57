//! Template rendering module.
//!
//! Provides Jinja2-style HTML rendering for the site pages.

pub mod renderer;

pub use renderer::TemplateRenderer;
