//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer that allows any origin, method and header.
///
/// The API is public and unauthenticated, so browser clients on other
/// origins (test runners, the hosted front page) may call it freely.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
