//! Error taxonomy reported to clients.
//!
//! Every error is answered with HTTP 200 and a body of the form
//! `{"error": "<message>"}`; the status code never carries the outcome.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Missing input, unparseable URL, non-http(s) scheme, or a hostname that
    /// failed to resolve. Deliberately undifferentiated.
    #[error("invalid url")]
    InvalidUrl,

    /// A well-formed identifier with no matching record.
    #[error("No short URL found for the given input")]
    NotFound,

    /// The identifier path segment is not an integer.
    #[error("Wrong format")]
    MalformedIdentifier,
}

impl AppError {
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.to_error_body())).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidUrl
    }
}
