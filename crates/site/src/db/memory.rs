//! In-process content store.
//!
//! Backs `FOLIO_STORE=memory` for previewing templates without a database,
//! and the router tests. Rows can be seeded from a JSON fixture file with
//! the shape of [`Fixtures`].

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::db::models::{
    Blog, Certificate, ContactProfile, DetailKey, NewContact, Portfolio, Testimonial,
};
use crate::db::ContentStore;
use crate::error::AppResult;

/// Complete contents of a memory store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,

    #[serde(default)]
    pub certificates: Vec<Certificate>,

    #[serde(default)]
    pub blogs: Vec<Blog>,

    #[serde(default)]
    pub portfolio: Vec<Portfolio>,

    #[serde(default)]
    pub contacts: Vec<ContactProfile>,
}

impl Fixtures {
    /// Put every table in primary-key order, matching the database store.
    fn sort(&mut self) {
        self.testimonials.sort_by_key(|r| r.id);
        self.certificates.sort_by_key(|r| r.id);
        self.blogs.sort_by_key(|r| r.id);
        self.portfolio.sort_by_key(|r| r.id);
        self.contacts.sort_by_key(|r| r.id);
    }
}

/// [`ContentStore`] over vectors guarded by a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Fixtures>,
}

impl MemoryStore {
    pub fn new(mut fixtures: Fixtures) -> Self {
        fixtures.sort();
        Self {
            data: RwLock::new(fixtures),
        }
    }

    /// Load fixtures from a JSON file.
    pub async fn from_fixture_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let fixtures: Fixtures = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            blogs = fixtures.blogs.len(),
            portfolio = fixtures.portfolio.len(),
            testimonials = fixtures.testimonials.len(),
            certificates = fixtures.certificates.len(),
            "Loaded content fixtures"
        );

        Ok(Self::new(fixtures))
    }

    /// Snapshot of stored contact messages.
    pub async fn contacts(&self) -> Vec<ContactProfile> {
        self.data.read().await.contacts.clone()
    }
}

fn active<T: Clone>(rows: &[T], is_active: impl Fn(&T) -> bool) -> Vec<T> {
    rows.iter().filter(|r| is_active(*r)).cloned().collect()
}

fn active_page<T: Clone>(
    rows: &[T],
    is_active: impl Fn(&T) -> bool,
    limit: u64,
    offset: u64,
) -> Vec<T> {
    rows.iter()
        .filter(|r| is_active(*r))
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> bool {
        true
    }

    async fn active_testimonials(&self) -> AppResult<Vec<Testimonial>> {
        Ok(active(&self.data.read().await.testimonials, |r| r.is_active))
    }

    async fn active_certificates(&self) -> AppResult<Vec<Certificate>> {
        Ok(active(&self.data.read().await.certificates, |r| r.is_active))
    }

    async fn active_blogs(&self) -> AppResult<Vec<Blog>> {
        Ok(active(&self.data.read().await.blogs, |r| r.is_active))
    }

    async fn count_active_blogs(&self) -> AppResult<u64> {
        let data = self.data.read().await;
        Ok(data.blogs.iter().filter(|r| r.is_active).count() as u64)
    }

    async fn page_active_blogs(&self, limit: u64, offset: u64) -> AppResult<Vec<Blog>> {
        let data = self.data.read().await;
        Ok(active_page(&data.blogs, |r| r.is_active, limit, offset))
    }

    async fn find_blog(&self, key: &DetailKey) -> AppResult<Option<Blog>> {
        let data = self.data.read().await;
        Ok(data
            .blogs
            .iter()
            .find(|r| key.matches(r.id, r.slug.as_deref()))
            .cloned())
    }

    async fn active_portfolio(&self) -> AppResult<Vec<Portfolio>> {
        Ok(active(&self.data.read().await.portfolio, |r| r.is_active))
    }

    async fn count_active_portfolio(&self) -> AppResult<u64> {
        let data = self.data.read().await;
        Ok(data.portfolio.iter().filter(|r| r.is_active).count() as u64)
    }

    async fn page_active_portfolio(&self, limit: u64, offset: u64) -> AppResult<Vec<Portfolio>> {
        let data = self.data.read().await;
        Ok(active_page(&data.portfolio, |r| r.is_active, limit, offset))
    }

    async fn find_portfolio(&self, key: &DetailKey) -> AppResult<Option<Portfolio>> {
        let data = self.data.read().await;
        Ok(data
            .portfolio
            .iter()
            .find(|r| key.matches(r.id, r.slug.as_deref()))
            .cloned())
    }

    async fn insert_contact(&self, contact: &NewContact) -> AppResult<i64> {
        let mut data = self.data.write().await;
        let id = data.contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        data.contacts.push(ContactProfile {
            id,
            timestamp: Utc::now(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            message: contact.message.clone(),
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn portfolio(id: i64, is_active: bool) -> Portfolio {
        Portfolio {
            id,
            date: None,
            name: format!("Project {}", id),
            description: None,
            body: None,
            image: None,
            slug: Some(format!("project-{}", id)),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_active_rows_are_sorted_and_filtered() {
        let store = MemoryStore::new(Fixtures {
            portfolio: vec![portfolio(3, true), portfolio(1, true), portfolio(2, false)],
            ..Default::default()
        });

        let ids: Vec<i64> = store
            .active_portfolio()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.count_active_portfolio().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_page_skips_inactive_rows() {
        let rows = (1..=25).map(|id| portfolio(id, id % 5 != 0)).collect();
        let store = MemoryStore::new(Fixtures {
            portfolio: rows,
            ..Default::default()
        });

        let page = store.page_active_portfolio(10, 10).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![13, 14, 16, 17, 18, 19, 21, 22, 23, 24]);
    }

    #[tokio::test]
    async fn test_find_ignores_active_flag() {
        let store = MemoryStore::new(Fixtures {
            portfolio: vec![portfolio(7, false)],
            ..Default::default()
        });

        assert!(store.find_portfolio(&DetailKey::Id(7)).await.unwrap().is_some());
        assert!(store
            .find_portfolio(&DetailKey::parse("project-7"))
            .await
            .unwrap()
            .is_some());
        assert!(store.find_portfolio(&DetailKey::Id(8)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_contact_assigns_ids() {
        let store = MemoryStore::default();
        let contact = NewContact {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };

        assert_eq!(store.insert_contact(&contact).await.unwrap(), 1);
        assert_eq!(store.insert_contact(&contact).await.unwrap(), 2);
        assert_eq!(store.contacts().await.len(), 2);
    }

    #[tokio::test]
    async fn test_load_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "blogs": [{{"id": 1, "name": "First post", "is_active": true}}],
                "testimonials": [{{"id": 1, "name": "Grace", "quote": "Great work", "is_active": false}}]
            }}"#
        )
        .unwrap();

        let store = MemoryStore::from_fixture_file(file.path()).await.unwrap();
        assert_eq!(store.active_blogs().await.unwrap().len(), 1);
        assert!(store.active_testimonials().await.unwrap().is_empty());
        assert!(store.active_certificates().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fixture_file_is_an_error() {
        let result = MemoryStore::from_fixture_file("/nonexistent/fixtures.json").await;
        assert!(result.is_err());
    }
}
