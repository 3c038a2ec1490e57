//! Jinja2-style page rendering using minijinja.
//!
//! Page templates are compiled into the binary from `templates/`.

use chrono::{DateTime, Utc};
use minijinja::{Environment, Error, ErrorKind, Value};
use serde::Serialize;

use crate::error::AppResult;

/// Embedded page templates, keyed by the name views render them with.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("portfolio.html", include_str!("../../templates/portfolio.html")),
    (
        "portfolio-detail.html",
        include_str!("../../templates/portfolio-detail.html"),
    ),
    ("blog.html", include_str!("../../templates/blog.html")),
    ("blog-detail.html", include_str!("../../templates/blog-detail.html")),
    ("pagination.html", include_str!("../../templates/pagination.html")),
    ("404.html", include_str!("../../templates/404.html")),
];

/// Default format for the `date` filter, e.g. "Mar 05, 2024".
const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Template renderer with the site's filters registered.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with all page templates loaded.
    ///
    /// Fails if any embedded template does not parse.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        env.add_filter("date", filter_date);
        env.add_filter("truncatechars", filter_truncatechars);

        Ok(Self { env })
    }

    /// Render the named template with a serializable context.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> AppResult<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

/// Format an RFC 3339 timestamp with a strftime pattern.
fn filter_date(value: &Value, format: Option<&str>) -> Result<String, Error> {
    if value.is_none() || value.is_undefined() {
        return Ok(String::new());
    }

    let raw = value.as_str().ok_or_else(|| {
        Error::new(ErrorKind::InvalidOperation, "date filter expects a timestamp string")
    })?;
    let parsed: DateTime<Utc> = raw
        .parse()
        .map_err(|e| Error::new(ErrorKind::InvalidOperation, format!("invalid timestamp: {}", e)))?;

    Ok(parsed
        .format(format.unwrap_or(DEFAULT_DATE_FORMAT))
        .to_string())
}

/// Shorten a string to `length` characters, ending with an ellipsis.
fn filter_truncatechars(value: &Value, length: usize) -> String {
    if value.is_none() || value.is_undefined() {
        return String::new();
    }

    let s = value.to_string();
    if s.chars().count() <= length {
        return s;
    }
    if length == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(length - 1).collect();
    out.push('…');
    out
}
