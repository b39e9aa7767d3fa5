#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use tower_http::normalize_path::NormalizePath;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use shorturl::domain::resolver::{HostResolver, ResolveError};
use shorturl::infrastructure::persistence::InMemoryUrlRepository;
use shorturl::routes::{AssetPaths, app_router, router};
use shorturl::state::AppState;

/// Host that never resolves.
pub const UNKNOWN_HOST: &str = "no-such-host.invalid";

/// Host whose lookup times out.
pub const SLOW_HOST: &str = "slow.example.net";

/// In-process resolver: everything resolves except [`UNKNOWN_HOST`] and
/// [`SLOW_HOST`]. Keeps tests off the network.
pub struct FakeResolver;

#[async_trait]
impl HostResolver for FakeResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        match host {
            UNKNOWN_HOST => Err(ResolveError::NoAddresses(host.to_string())),
            SLOW_HOST => Err(ResolveError::Timeout(Duration::from_secs(5))),
            _ => Ok(()),
        }
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUrlRepository::new()),
        Arc::new(FakeResolver),
    )
}

pub fn test_assets() -> AssetPaths {
    AssetPaths::new("tests/fixtures/public", "tests/fixtures/views")
}

pub fn create_test_app() -> Router {
    router(create_test_state(), &test_assets())
}

/// Router as served in production, with trailing-slash trimming in front.
pub fn create_normalized_test_app() -> NormalizePath<Router> {
    app_router(create_test_state(), &test_assets())
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}
