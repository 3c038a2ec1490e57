//! Contact message queries.

use crate::db::models::NewContact;
use crate::db::DbPool;
use crate::error::AppResult;

/// Insert a contact message and return its ID.
pub async fn insert_contact(pool: &DbPool, contact: &NewContact) -> AppResult<i64> {
    let result: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO folio.contact_profile (name, email, message)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.message)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
