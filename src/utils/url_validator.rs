//! Submitted URL validation.
//!
//! Accepts absolute `http`/`https` URLs with a host. The input is never
//! rewritten: the caller stores exactly what was submitted.

use url::{Host, Url};

/// Reasons a submitted string is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    /// The submitted string, unmodified.
    pub original: String,
    /// Hostname to probe. IPv6 literals are given without brackets.
    pub host: String,
}

/// Validates a raw submission.
///
/// # Rules
///
/// 1. **Non-empty**: blank input is rejected
/// 2. **Absolute**: must parse as an absolute URL (WHATWG rules)
/// 3. **Protocol**: scheme must be `http` or `https` after parsing, so
///    `HTTP://example.com` is accepted
/// 4. **Host**: must be present and non-empty
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] that applies.
///
/// # Examples
///
/// ```ignore
/// let validated = validate_url("https://www.freecodecamp.org").unwrap();
/// assert_eq!(validated.host, "www.freecodecamp.org");
/// assert_eq!(validated.original, "https://www.freecodecamp.org");
///
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(raw: &str) -> Result<ValidatedUrl, UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    let host = match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => return Err(UrlValidationError::MissingHost),
    };

    Ok(ValidatedUrl {
        original: raw.to_string(),
        host,
    })
}
