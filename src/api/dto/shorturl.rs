//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Submission body, accepted as JSON or as an urlencoded form.
///
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortUrlRequest {
    /// The URL to register (must be an absolute HTTP/HTTPS URL).
    #[validate(required, url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

/// A registered URL and its identifier.
#[derive(Debug, Serialize)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlRecord> for ShortUrlResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.id,
        }
    }
}
