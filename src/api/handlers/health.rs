//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// The in-memory registry cannot become unavailable, so this always answers
/// `200 OK`. The registry check reports how many URLs are stored and, once
/// anything is registered, when the newest one arrived.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "2 URLs registered",
///       "last_registered_at": "2026-01-01T12:00:00Z"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = check_registry(&state).await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { registry },
    })
}

/// Reports the registry size and latest registration time.
async fn check_registry(state: &AppState) -> CheckStatus {
    let service = &state.short_url_service;
    let count = service.registered_count().await;

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} URLs registered", count)),
        last_registered_at: service.last_registered_at().await,
    }
}
