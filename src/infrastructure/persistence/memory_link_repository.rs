//! In-memory implementation of link repository.
//!
//! Contents are lost on shutdown. Used when no database is configured and by
//! the HTTP integration tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store backed by a `HashMap` behind an async `RwLock`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLinkRepository {
    links: Arc<RwLock<HashMap<String, Link>>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn save(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = new_link.into_link(Utc::now());

        self.links
            .write()
            .await
            .insert(link.id.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.links.read().await.contains_key(id))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(id: &str, target: &str) -> NewLink {
        NewLink {
            id: id.to_string(),
            target: target.to_string(),
            tracking_id: None,
            use_alt_domain: false,
            add_utm: false,
            apply_mask: true,
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryLinkRepository::new();

        let saved = repo
            .save(new_link("abcd1234", "https://example.com"))
            .await
            .unwrap();
        let found = repo.find_by_id("abcd1234").await.unwrap();

        assert_eq!(found, Some(saved));
        assert!(repo.exists("abcd1234").await.unwrap());
        assert!(!repo.exists("zzzz9999").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_replaces_wholesale() {
        let repo = InMemoryLinkRepository::new();

        repo.save(NewLink {
            tracking_id: Some("old".to_string()),
            ..new_link("abcd1234", "https://old.example.com")
        })
        .await
        .unwrap();
        repo.save(new_link("abcd1234", "https://new.example.com"))
            .await
            .unwrap();

        let found = repo.find_by_id("abcd1234").await.unwrap().unwrap();
        assert_eq!(found.target, "https://new.example.com");
        assert!(found.tracking_id.is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryLinkRepository::new();
        let other = repo.clone();

        repo.save(new_link("abcd1234", "https://example.com"))
            .await
            .unwrap();

        assert!(other.exists("abcd1234").await.unwrap());
    }
}
