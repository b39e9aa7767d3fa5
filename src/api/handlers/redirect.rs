//! Handler for identifier redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// # Response
///
/// `302 Found` with `Location` set to the URL exactly as it was submitted.
/// If that string is not a legal header value (raw non-ASCII, for example)
/// its parsed, percent-encoded form is used instead.
///
/// # Errors
///
/// Both answered with `200 OK` and a JSON error body:
/// - `{"error": "Wrong format"}` if `id` is not an integer, including
///   segments that do not percent-decode to UTF-8
/// - `{"error": "No short URL found for the given input"}` if nothing matches
pub async fn redirect_short_url_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(|rejection| {
        debug!("Rejected identifier segment: {}", rejection.body_text());
        AppError::MalformedIdentifier
    })?;

    let record = state.short_url_service.lookup_identifier(&id).await?;

    debug!("Redirecting {} to {}", record.id, record.original_url);

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let normalized = Url::parse(original_url).map_err(|_| AppError::InvalidUrl)?;
    HeaderValue::from_str(normalized.as_str()).map_err(|_| AppError::InvalidUrl)
}
