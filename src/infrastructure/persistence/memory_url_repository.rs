//! In-memory implementation of [`UrlRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::info;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;

/// Records plus the reverse index, guarded together so the dedup check and
/// the id allocation form one critical section.
#[derive(Debug)]
struct Registry {
    records: Vec<UrlRecord>,
    ids_by_url: HashMap<String, i64>,
    next_id: i64,
}

impl Registry {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            ids_by_url: HashMap::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: i64) -> Option<&UrlRecord> {
        // Ids are gapless from 1, so record `id` lives at index `id - 1`.
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.records.get(index)
    }

    fn get_by_url(&self, url: &str) -> Option<&UrlRecord> {
        self.ids_by_url.get(url).and_then(|id| self.get(*id))
    }
}

/// Process-local URL registry.
///
/// Reads take a shared lock; registration takes the exclusive lock and
/// re-checks for the URL before allocating an id. The lock is never held
/// across an `.await`.
///
/// State is lost on restart.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    inner: RwLock<Registry>,
}

impl InMemoryUrlRepository {
    /// Creates an empty registry whose first id will be 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry::new()),
        }
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn get_or_create(&self, url: &str) -> UrlRecord {
        if let Some(existing) = self.inner.read().get_by_url(url) {
            return existing.clone();
        }

        let mut registry = self.inner.write();

        // Another request may have registered the same URL between the locks.
        if let Some(existing) = registry.get_by_url(url) {
            return existing.clone();
        }

        let id = registry.next_id;
        registry.next_id += 1;

        let record = UrlRecord::new(id, url.to_string());
        registry.ids_by_url.insert(record.original_url.clone(), id);
        registry.records.push(record.clone());

        info!(
            id,
            url = %record.original_url,
            created_at = %record.created_at,
            "Registered new URL"
        );

        record
    }

    async fn find_by_id(&self, id: i64) -> Option<UrlRecord> {
        self.inner.read().get(id).cloned()
    }

    async fn count(&self) -> usize {
        self.inner.read().records.len()
    }

    async fn last_registered_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().records.last().map(|record| record.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_id_is_one() {
        let repo = InMemoryUrlRepository::new();

        let record = repo.get_or_create("https://www.freecodecamp.org").await;

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_sequential_ids() {
        let repo = InMemoryUrlRepository::new();

        let a = repo.get_or_create("https://a.example.com").await;
        let b = repo.get_or_create("https://b.example.com").await;
        let c = repo.get_or_create("https://c.example.com").await;

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn test_same_url_reuses_id() {
        let repo = InMemoryUrlRepository::new();

        let first = repo.get_or_create("https://example.com").await;
        let second = repo.get_or_create("https://example.com").await;

        assert_eq!(first, second);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_exact_string_dedup() {
        let repo = InMemoryUrlRepository::new();

        let bare = repo.get_or_create("http://example.com").await;
        let slash = repo.get_or_create("http://example.com/").await;

        assert_ne!(bare.id, slash.id);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUrlRepository::new();
        let created = repo.get_or_create("https://example.com").await;

        let found = repo.find_by_id(created.id).await;

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_by_id_unassigned() {
        let repo = InMemoryUrlRepository::new();
        repo.get_or_create("https://example.com").await;

        assert!(repo.find_by_id(0).await.is_none());
        assert!(repo.find_by_id(-1).await.is_none());
        assert!(repo.find_by_id(2).await.is_none());
        assert!(repo.find_by_id(i64::MIN).await.is_none());
        assert!(repo.find_by_id(i64::MAX).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let repo = InMemoryUrlRepository::default();

        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_id(1).await.is_none());
        assert!(repo.last_registered_at().await.is_none());
    }

    #[tokio::test]
    async fn test_last_registered_at_tracks_newest_record() {
        let repo = InMemoryUrlRepository::new();

        repo.get_or_create("https://a.example.com").await;
        let newest = repo.get_or_create("https://b.example.com").await;

        // Re-submitting an older URL does not move the timestamp.
        repo.get_or_create("https://a.example.com").await;

        assert_eq!(repo.last_registered_at().await, Some(newest.created_at));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_url_single_record() {
        let repo = Arc::new(InMemoryUrlRepository::new());
        let mut handles = vec![];

        for _ in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.get_or_create("https://race.example.com").await.id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_distinct_urls_gapless_ids() {
        let repo = Arc::new(InMemoryUrlRepository::new());
        let mut handles = vec![];

        for i in 0..100 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.get_or_create(&format!("https://example{i}.com"))
                    .await
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=100).collect::<Vec<i64>>());

        for id in 1..=100 {
            let record = repo.find_by_id(id).await.unwrap();
            assert_eq!(record.id, id);
        }
    }
}
