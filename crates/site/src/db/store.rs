//! Storage seam between the views and the backing database.

use async_trait::async_trait;

use crate::db::models::{Blog, Certificate, DetailKey, NewContact, Portfolio, Testimonial};
use crate::error::AppResult;

/// Read access to published content plus the single write the site makes.
///
/// "Active" methods only ever return rows with `is_active = true`, ordered
/// by ascending ID. `find_*` lookups ignore the flag.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;

    /// Whether the backend is reachable.
    async fn ping(&self) -> bool;

    async fn active_testimonials(&self) -> AppResult<Vec<Testimonial>>;

    async fn active_certificates(&self) -> AppResult<Vec<Certificate>>;

    async fn active_blogs(&self) -> AppResult<Vec<Blog>>;

    async fn count_active_blogs(&self) -> AppResult<u64>;

    async fn page_active_blogs(&self, limit: u64, offset: u64) -> AppResult<Vec<Blog>>;

    async fn find_blog(&self, key: &DetailKey) -> AppResult<Option<Blog>>;

    async fn active_portfolio(&self) -> AppResult<Vec<Portfolio>>;

    async fn count_active_portfolio(&self) -> AppResult<u64>;

    async fn page_active_portfolio(&self, limit: u64, offset: u64) -> AppResult<Vec<Portfolio>>;

    async fn find_portfolio(&self, key: &DetailKey) -> AppResult<Option<Portfolio>>;

    /// Persist a contact message, returning the new row ID.
    async fn insert_contact(&self, contact: &NewContact) -> AppResult<i64>;
}
