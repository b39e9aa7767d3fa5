//! Short URL registration and lookup service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Service for registering URLs and resolving identifiers back to them.
///
/// Registration runs strictly in order: validation, hostname check, then the
/// registry. Nothing is written unless both checks succeed, and the registry
/// is not touched while the hostname lookup is pending.
pub struct ShortUrlService<R: UrlRepository + ?Sized, H: HostResolver + ?Sized> {
    repository: Arc<R>,
    resolver: Arc<H>,
}

impl<R: UrlRepository + ?Sized, H: HostResolver + ?Sized> ShortUrlService<R, H> {
    /// Creates a new short URL service.
    pub fn new(repository: Arc<R>, resolver: Arc<H>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Registers a submitted URL, or returns its existing record.
    ///
    /// Submitting the identical string again always yields the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if:
    /// - `raw` is missing or empty
    /// - it is not an absolute `http`/`https` URL with a host
    /// - the hostname does not resolve (including timeouts)
    pub async fn shorten(&self, raw: Option<&str>) -> Result<UrlRecord, AppError> {
        let raw = raw.ok_or_else(|| {
            debug!("Rejected submission: url field missing");
            AppError::InvalidUrl
        })?;

        let validated = validate_url(raw).map_err(|e| {
            debug!("Rejected submission {:?}: {}", raw, e);
            AppError::InvalidUrl
        })?;

        self.resolver.resolve(&validated.host).await.map_err(|e| {
            warn!("Hostname check failed for {}: {}", validated.host, e);
            AppError::InvalidUrl
        })?;

        let record = self.repository.get_or_create(&validated.original).await;

        debug!(id = record.id, url = %record.original_url, "Short URL ready");

        Ok(record)
    }

    /// Retrieves a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn lookup(&self, id: i64) -> Result<UrlRecord, AppError> {
        self.repository.find_by_id(id).await.ok_or_else(|| {
            debug!("No short URL for id {}", id);
            AppError::NotFound
        })
    }

    /// Parses a path segment as an identifier and retrieves its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedIdentifier`] if the segment is not an
    /// integer, or [`AppError::NotFound`] as in [`Self::lookup`].
    pub async fn lookup_identifier(&self, segment: &str) -> Result<UrlRecord, AppError> {
        let id = parse_identifier(segment)?;
        self.lookup(id).await
    }

    /// Number of URLs currently registered.
    pub async fn registered_count(&self) -> usize {
        self.repository.count().await
    }

    /// When the newest URL was registered, or `None` while the registry is empty.
    pub async fn last_registered_at(&self) -> Option<DateTime<Utc>> {
        self.repository.last_registered_at().await
    }
}

/// Parses an identifier path segment.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// `i64` (fractions, hex, out-of-range values) is malformed.
pub fn parse_identifier(segment: &str) -> Result<i64, AppError> {
    segment
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::MalformedIdentifier)
}
