//! Contact message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ContactProfile {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validated submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
