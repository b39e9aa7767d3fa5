//! Top-level router configuration combining API routes and static pages.
//!
//! # Route Structure
//!
//! - `GET  /`                   - Front page (`index.html` from the views directory)
//! - `GET  /public/*`           - Static assets
//! - `GET  /health`             - Health check
//! - `GET  /api/hello`          - Greeting
//! - `POST /api/shorturl`       - Register a URL
//! - `GET  /api/shorturl/{id}`  - Redirect to a registered URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use std::path::PathBuf;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the files served outside the API.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    /// Directory mounted under `/public`.
    pub public_dir: PathBuf,
    /// File served at `/`.
    pub index_file: PathBuf,
}

impl AssetPaths {
    /// Uses `<views_dir>/index.html` as the front page.
    pub fn new(public_dir: impl Into<PathBuf>, views_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            index_file: views_dir.into().join("index.html"),
        }
    }
}

/// Builds the router with all routes and middleware, without path
/// normalization.
pub fn router(state: AppState, assets: &AssetPaths) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&assets.index_file))
        .nest_service("/public", ServeDir::new(&assets.public_dir))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/api/shorturl/` reaches
/// the submission endpoint.
pub fn app_router(state: AppState, assets: &AssetPaths) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, assets))
}
