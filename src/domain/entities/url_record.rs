//! Url record entity representing an identifier-to-URL mapping.

use chrono::{DateTime, Utc};

/// A registered URL together with its sequential identifier.
///
/// `original_url` is the exact string the caller submitted. It is never
/// re-serialized, so dedup compares what callers actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance stamped with the current time.
    pub fn new(id: i64, original_url: String) -> Self {
        Self {
            id,
            original_url,
            created_at: Utc::now(),
        }
    }
}
