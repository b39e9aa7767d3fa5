//! Resolver using the operating system's name lookup.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::debug;

use crate::domain::resolver::{HostResolver, ResolveError};

/// Port paired with the host for `getaddrinfo`; only the host matters.
const PROBE_PORT: u16 = 80;

/// Resolves hostnames through `getaddrinfo` (honours `/etc/hosts`).
///
/// Each call makes a single attempt bounded by `timeout`; there is no retry.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        resolve_within(host, self.timeout, lookup_host((host, PROBE_PORT))).await
    }
}

/// Awaits `lookup` for at most `limit` and requires at least one address.
async fn resolve_within<F, I>(host: &str, limit: Duration, lookup: F) -> Result<(), ResolveError>
where
    F: Future<Output = io::Result<I>>,
    I: Iterator<Item = SocketAddr>,
{
    let mut addrs = timeout(limit, lookup)
        .await
        .map_err(|_| ResolveError::Timeout(limit))??;

    match addrs.next() {
        Some(addr) => {
            debug!("Resolved {} to {}", host, addr.ip());
            Ok(())
        }
        None => Err(ResolveError::NoAddresses(host.to_string())),
    }
}
