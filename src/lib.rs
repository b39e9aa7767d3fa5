//! # Short URL
//!
//! A small URL shortener microservice built with Axum.
//!
//! Submitted URLs are validated, checked for a resolvable hostname,
//! deduplicated by exact string and assigned sequential numeric identifiers.
//! Identifiers redirect back to the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record and the registry/resolver contracts
//! - **Application Layer** ([`application`]) - Registration and lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and system DNS resolver
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## API
//!
//! ```text
//! POST /api/shorturl        url=<url>  -> {"original_url": "...", "short_url": 1}
//! GET  /api/shorturl/{id}              -> 302 to the original URL
//! ```
//!
//! Errors are reported with HTTP 200 and `{"error": "..."}`.
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=3000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortUrlService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::domain::resolver::{HostResolver, ResolveError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::dns::SystemResolver;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::routes::AssetPaths;
    pub use crate::state::AppState;
}
