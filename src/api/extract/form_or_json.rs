//! Body extractor accepting either JSON or an urlencoded form.

use std::convert::Infallible;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Deserializes the request body as JSON when the `Content-Type` says so and
/// as `application/x-www-form-urlencoded` otherwise.
///
/// Never rejects: a body that cannot be read falls back to `T::default()`, so
/// the handler decides how to report missing fields. The short URL endpoint
/// turns that into `{"error": "invalid url"}` rather than a 4xx.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(FormOrJson(payload): FormOrJson<ShortUrlRequest>) { ... }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if is_json(&req) {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|rejection| rejection.body_text())
        } else {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|rejection| rejection.body_text())
        };

        match parsed {
            Ok(value) => Ok(Self(value)),
            Err(reason) => {
                debug!("Unreadable request body, using defaults: {}", reason);
                Ok(Self(T::default()))
            }
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        url: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Payload {
        let mut builder = http::Request::builder().method("POST").uri("/api/shorturl");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        let FormOrJson(payload) = FormOrJson::<Payload>::from_request(req, &())
            .await
            .unwrap();
        payload
    }

    #[tokio::test]
    async fn test_extract_json() {
        let payload = extract(Some("application/json"), r#"{"url":"https://example.com"}"#).await;
        assert_eq!(payload.url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_extract_json_with_charset() {
        let payload = extract(
            Some("application/json; charset=utf-8"),
            r#"{"url":"https://example.com"}"#,
        )
        .await;
        assert_eq!(payload.url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_extract_form() {
        let payload = extract(
            Some("application/x-www-form-urlencoded"),
            "url=https%3A%2F%2Fexample.com%2F%3Fa%3D1",
        )
        .await;
        assert_eq!(payload.url.as_deref(), Some("https://example.com/?a=1"));
    }

    #[tokio::test]
    async fn test_extract_malformed_json_defaults() {
        let payload = extract(Some("application/json"), "{not json").await;
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_extract_wrong_type_defaults() {
        let payload = extract(Some("application/json"), r#"{"url": 42}"#).await;
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_extract_missing_content_type_defaults() {
        let payload = extract(None, "url=https://example.com").await;
        assert_eq!(payload, Payload::default());
    }
}
