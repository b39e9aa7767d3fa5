//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - URL registration and identifier lookup

pub mod services;
