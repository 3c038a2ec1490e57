//! Content service: home page aggregation, listings and detail lookups.

use std::sync::Arc;

use serde::Serialize;

use crate::db::models::{Blog, Certificate, DetailKey, Portfolio, Testimonial};
use crate::db::ContentStore;
use crate::error::{AppError, AppResult};
use crate::pagination::{Listing, PageRequest, Paginator};

/// Context of the home page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexContext {
    pub testimonials: Vec<Testimonial>,
    pub certificates: Vec<Certificate>,
    pub blogs: Vec<Blog>,
    pub portfolio: Vec<Portfolio>,
}

/// Service for published content.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    page_size: u64,
    detail_require_active: bool,
}

impl ContentService {
    /// Create a new content service.
    pub fn new(store: Arc<dyn ContentStore>, page_size: u64, detail_require_active: bool) -> Self {
        Self {
            store,
            page_size,
            detail_require_active,
        }
    }

    /// All active testimonials, certificates, blog posts and portfolio items.
    pub async fn index(&self) -> AppResult<IndexContext> {
        let (testimonials, certificates, blogs, portfolio) = tokio::try_join!(
            self.store.active_testimonials(),
            self.store.active_certificates(),
            self.store.active_blogs(),
            self.store.active_portfolio(),
        )?;

        Ok(IndexContext {
            testimonials,
            certificates,
            blogs,
            portfolio,
        })
    }

    /// One page of active portfolio items.
    pub async fn portfolio_list(&self, page: PageRequest) -> AppResult<Listing<Portfolio>> {
        let paginator = Paginator::new(self.store.count_active_portfolio().await?, self.page_size);
        let window = paginator.page(page)?;
        let rows = self
            .store
            .page_active_portfolio(window.limit, window.offset)
            .await?;

        Ok(Listing::new(&paginator, window, rows))
    }

    /// A single portfolio item.
    pub async fn portfolio_detail(&self, key: &DetailKey) -> AppResult<Portfolio> {
        self.store
            .find_portfolio(key)
            .await?
            .filter(|item| item.is_active || !self.detail_require_active)
            .ok_or_else(|| AppError::NotFound(format!("Portfolio '{}' not found", key)))
    }

    /// One page of active blog posts.
    pub async fn blog_list(&self, page: PageRequest) -> AppResult<Listing<Blog>> {
        let paginator = Paginator::new(self.store.count_active_blogs().await?, self.page_size);
        let window = paginator.page(page)?;
        let rows = self
            .store
            .page_active_blogs(window.limit, window.offset)
            .await?;

        Ok(Listing::new(&paginator, window, rows))
    }

    /// A single blog post.
    pub async fn blog_detail(&self, key: &DetailKey) -> AppResult<Blog> {
        self.store
            .find_blog(key)
            .await?
            .filter(|post| post.is_active || !self.detail_require_active)
            .ok_or_else(|| AppError::NotFound(format!("Blog '{}' not found", key)))
    }
}
