//! PostgreSQL-backed content store.

use async_trait::async_trait;

use crate::db::models::{Blog, Certificate, DetailKey, NewContact, Portfolio, Testimonial};
use crate::db::pool;
use crate::db::queries::{contact, content};
use crate::db::{ContentStore, DbPool};
use crate::error::AppResult;

/// Embedded schema migrations from `migrations/`.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Delegates every operation to the query functions in [`crate::db::queries`].
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> AppResult<()> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }
}

#[async_trait]
impl ContentStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> bool {
        pool::ping(&self.pool).await
    }

    async fn active_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        content::list_active_testimonials(&self.pool).await
    }

    async fn active_certificates(&self) -> AppResult<Vec<Certificate>> {
        content::list_active_certificates(&self.pool).await
    }

    async fn active_blogs(&self) -> AppResult<Vec<Blog>> {
        content::list_active_blogs(&self.pool).await
    }

    async fn count_active_blogs(&self) -> AppResult<u64> {
        content::count_active_blogs(&self.pool).await
    }

    async fn page_active_blogs(&self, limit: u64, offset: u64) -> AppResult<Vec<Blog>> {
        content::page_active_blogs(&self.pool, limit, offset).await
    }

    async fn find_blog(&self, key: &DetailKey) -> AppResult<Option<Blog>> {
        match key {
            DetailKey::Id(id) => content::get_blog_by_id(&self.pool, *id).await,
            DetailKey::Slug(slug) => content::get_blog_by_slug(&self.pool, slug).await,
        }
    }

    async fn active_portfolio(&self) -> AppResult<Vec<Portfolio>> {
        content::list_active_portfolio(&self.pool).await
    }

    async fn count_active_portfolio(&self) -> AppResult<u64> {
        content::count_active_portfolio(&self.pool).await
    }

    async fn page_active_portfolio(&self, limit: u64, offset: u64) -> AppResult<Vec<Portfolio>> {
        content::page_active_portfolio(&self.pool, limit, offset).await
    }

    async fn find_portfolio(&self, key: &DetailKey) -> AppResult<Option<Portfolio>> {
        match key {
            DetailKey::Id(id) => content::get_portfolio_by_id(&self.pool, *id).await,
            DetailKey::Slug(slug) => content::get_portfolio_by_slug(&self.pool, slug).await,
        }
    }

    async fn insert_contact(&self, new_contact: &NewContact) -> AppResult<i64> {
        contact::insert_contact(&self.pool, new_contact).await
    }
}
