//! Handler for URL submission.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorturl::{ShortUrlRequest, ShortUrlResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its numeric identifier.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON or urlencoded form with a `url` field:
///
/// ```json
/// { "url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// Submitting the same string again returns the same `short_url`.
///
/// # Errors
///
/// Answers `200 OK` with `{"error": "invalid url"}` if the field is missing,
/// the URL is not absolute http(s), or its hostname does not resolve.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<ShortUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .short_url_service
        .shorten(payload.url.as_deref())
        .await?;

    Ok(Json(record.into()))
}
