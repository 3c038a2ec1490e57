//! Published content models.
//!
//! Rows are created and edited outside this application. Every table
//! carries an `is_active` flag; only active rows appear on the home page
//! and in listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client testimonial shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: i64,

    /// Person quoted
    pub name: String,

    /// Their role or company
    #[serde(default)]
    pub role: Option<String>,

    pub quote: String,

    /// Image path relative to the static root
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

/// Certificate or award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: i64,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Issuer
    pub name: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

/// Blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: i64,

    /// Publication time
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author: Option<String>,

    /// Post title
    pub name: String,

    /// Short summary shown in listings
    #[serde(default)]
    pub description: Option<String>,

    /// Full post body (HTML)
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

/// Portfolio item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: i64,

    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

/// Identifier segment of a detail URL: a numeric primary key or a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailKey {
    Id(i64),
    Slug(String),
}

impl DetailKey {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(id) => DetailKey::Id(id),
            Err(_) => DetailKey::Slug(raw.to_string()),
        }
    }

    /// Whether a row with this `id` and `slug` is the one addressed.
    pub fn matches(&self, id: i64, slug: Option<&str>) -> bool {
        match self {
            DetailKey::Id(key) => *key == id,
            DetailKey::Slug(key) => slug == Some(key.as_str()),
        }
    }
}

impl std::fmt::Display for DetailKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailKey::Id(id) => write!(f, "{}", id),
            DetailKey::Slug(slug) => f.write_str(slug),
        }
    }
}
