//! # Lenient JSON Extraction
//!
//! Request bodies on this service are never rejected. A body that is
//! missing, not declared as JSON, not valid JSON, or not a JSON object is
//! read as an empty request (`T::default()`), and handlers decide what
//! missing fields mean.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON body extractor that falls back to `T::default()` instead of
/// rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, "request body unreadable, treating as empty");
                return Ok(Self(T::default()));
            }
        };
        Ok(Self(parse_lenient(&body)))
    }
}

/// Parse `body` as a JSON object into `T`, or return `T::default()`.
pub fn parse_lenient<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "request body has unexpected fields, treating as empty");
            T::default()
        }),
        Ok(_) => T::default(),
        Err(err) => {
            if !body.is_empty() {
                tracing::debug!(error = %err, "request body is not JSON, treating as empty");
            }
            T::default()
        }
    }
}

/// `application/json`, or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Probe {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn object_body_is_parsed() {
        let probe: Probe = parse_lenient(br#"{"name":"Alice","other":1}"#);
        assert_eq!(probe.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn non_object_bodies_are_empty() {
        for body in [&b""[..], b"not json", b"[1,2,3]", b"\"text\"", b"null", b"42"] {
            assert_eq!(parse_lenient::<Probe>(body), Probe::default());
        }
    }

    #[test]
    fn mistyped_fields_are_empty() {
        let probe: Probe = parse_lenient(br#"{"name": 5}"#);
        assert_eq!(probe, Probe::default());
    }

    #[test]
    fn content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        assert!(is_json_content_type(&headers));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/ld+json"));
        assert!(is_json_content_type(&headers));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(!is_json_content_type(&headers));
    }

    #[tokio::test]
    async fn wrong_content_type_is_empty() {
        let req = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "text/plain")
            .body(Body::from(r#"{"name":"Alice"}"#))
            .unwrap();
        let LenientJson(probe) = LenientJson::<Probe>::from_request(req, &()).await.unwrap();
        assert_eq!(probe, Probe::default());
    }

    #[tokio::test]
    async fn json_request_is_parsed() {
        let req = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Alice"}"#))
            .unwrap();
        let LenientJson(probe) = LenientJson::<Probe>::from_request(req, &()).await.unwrap();
        assert_eq!(probe.name.as_deref(), Some("Alice"));
    }
}
