//! API route configuration.

use crate::api::handlers::{create_short_url_handler, hello_handler, redirect_short_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /hello`          - Greeting
/// - `POST /shorturl`       - Register a URL
/// - `GET  /shorturl/{id}`  - Redirect to a registered URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{id}", get(redirect_short_url_handler))
}
