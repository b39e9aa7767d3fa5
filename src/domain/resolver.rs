//! Hostname existence check contract.

use async_trait::async_trait;
use std::io;
use std::time::Duration;

/// Errors produced by a hostname lookup.
///
/// Callers outside the service never see these distinctions: every variant
/// is reported as an invalid URL.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] io::Error),

    #[error("no addresses found for {0}")]
    NoAddresses(String),

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Checks that a hostname resolves to at least one address.
///
/// Performed once per submission, before the registry is touched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, succeeding if at least one address is returned.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
