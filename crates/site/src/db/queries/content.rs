//! Content database queries.
//!
//! Every list query orders by primary key so page slices are stable.

use super::sql_bound;
use crate::db::models::{Blog, Certificate, Portfolio, Testimonial};
use crate::db::DbPool;
use crate::error::AppResult;

/// All active testimonials.
pub async fn list_active_testimonials(pool: &DbPool) -> AppResult<Vec<Testimonial>> {
    let rows = sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT id, name, role, quote, thumbnail, is_active
        FROM folio.testimonial
        WHERE is_active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// All active certificates.
pub async fn list_active_certificates(pool: &DbPool) -> AppResult<Vec<Certificate>> {
    let rows = sqlx::query_as::<_, Certificate>(
        r#"
        SELECT id, date, name, title, description, is_active
        FROM folio.certificate
        WHERE is_active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// All active blog posts.
pub async fn list_active_blogs(pool: &DbPool) -> AppResult<Vec<Blog>> {
    let rows = sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, timestamp, author, name, description, body, slug, image, is_active
        FROM folio.blog
        WHERE is_active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count active blog posts.
pub async fn count_active_blogs(pool: &DbPool) -> AppResult<u64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM folio.blog WHERE is_active = TRUE")
            .fetch_one(pool)
            .await?;

    Ok(count.max(0) as u64)
}

/// One page of active blog posts.
pub async fn page_active_blogs(pool: &DbPool, limit: u64, offset: u64) -> AppResult<Vec<Blog>> {
    let rows = sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, timestamp, author, name, description, body, slug, image, is_active
        FROM folio.blog
        WHERE is_active = TRUE
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(sql_bound(limit))
    .bind(sql_bound(offset))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a blog post by ID, active or not.
pub async fn get_blog_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Blog>> {
    let row = sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, timestamp, author, name, description, body, slug, image, is_active
        FROM folio.blog
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Get a blog post by slug, active or not.
pub async fn get_blog_by_slug(pool: &DbPool, slug: &str) -> AppResult<Option<Blog>> {
    let row = sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, timestamp, author, name, description, body, slug, image, is_active
        FROM folio.blog
        WHERE slug = $1
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// All active portfolio items.
pub async fn list_active_portfolio(pool: &DbPool) -> AppResult<Vec<Portfolio>> {
    let rows = sqlx::query_as::<_, Portfolio>(
        r#"
        SELECT id, date, name, description, body, image, slug, is_active
        FROM folio.portfolio
        WHERE is_active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count active portfolio items.
pub async fn count_active_portfolio(pool: &DbPool) -> AppResult<u64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM folio.portfolio WHERE is_active = TRUE")
            .fetch_one(pool)
            .await?;

    Ok(count.max(0) as u64)
}

/// One page of active portfolio items.
pub async fn page_active_portfolio(
    pool: &DbPool,
    limit: u64,
    offset: u64,
) -> AppResult<Vec<Portfolio>> {
    let rows = sqlx::query_as::<_, Portfolio>(
        r#"
        SELECT id, date, name, description, body, image, slug, is_active
        FROM folio.portfolio
        WHERE is_active = TRUE
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(sql_bound(limit))
    .bind(sql_bound(offset))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a portfolio item by ID, active or not.
pub async fn get_portfolio_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Portfolio>> {
    let row = sqlx::query_as::<_, Portfolio>(
        r#"
        SELECT id, date, name, description, body, image, slug, is_active
        FROM folio.portfolio
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Get a portfolio item by slug, active or not.
pub async fn get_portfolio_by_slug(pool: &DbPool, slug: &str) -> AppResult<Option<Portfolio>> {
    let row = sqlx::query_as::<_, Portfolio>(
        r#"
        SELECT id, date, name, description, body, image, slug, is_active
        FROM folio.portfolio
        WHERE slug = $1
        ORDER BY id
        LIMIT 1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
