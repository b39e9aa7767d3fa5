//! Repository trait for the identifier/URL registry.

use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Registry of submitted URLs keyed by sequential identifiers.
///
/// Implementations must uphold:
/// - `original_url` values are pairwise distinct (exact string equality)
/// - identifiers start at 1, increase by one per insertion and are never reused
/// - concurrent `get_or_create` calls for the same URL yield a single record
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the record for `url`, registering it under the next identifier
    /// if it has not been seen before.
    ///
    /// The caller is responsible for validating `url` first.
    async fn get_or_create(&self, url: &str) -> UrlRecord;

    /// Finds a record by identifier.
    ///
    /// Any integer is accepted; zero, negative and never-assigned values
    /// simply return `None`.
    async fn find_by_id(&self, id: i64) -> Option<UrlRecord>;

    /// Number of registered URLs.
    async fn count(&self) -> usize;

    /// Creation time of the most recently registered URL, if any.
    async fn last_registered_at(&self) -> Option<DateTime<Utc>>;
}
