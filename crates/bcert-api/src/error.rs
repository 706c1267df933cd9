//! # API Error Types
//!
//! Maps domain errors to HTTP responses. Both error bodies are plain text:
//! clients of the issuer match on the literal `Certificate not found`.
//! Internal error details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use bcert_state::StoreError;
use bcert_vc::VcError;

/// Body of every 404 response.
pub const NOT_FOUND_BODY: &str = "Certificate not found";

/// Body of every 500 response.
pub const INTERNAL_ERROR_BODY: &str = "An internal error occurred";

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// No certificate under the requested id (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_BODY),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::NotFound(_) => tracing::debug!(error = %self, "certificate lookup missed"),
        }

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<VcError> for AppError {
    fn from(err: VcError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcert_core::CertificateId;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_plaintext_404() {
        let response = AppError::NotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Certificate not found");
    }

    #[tokio::test]
    async fn internal_hides_details() {
        let response = AppError::Internal("serializer exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert_eq!(body, INTERNAL_ERROR_BODY);
        assert!(!body.contains("exploded"));
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let id = CertificateId::new();
        let err: AppError = StoreError::NotFound(id).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains(&id.to_string())));
    }

    #[test]
    fn vc_error_maps_to_internal() {
        let err: AppError = VcError::UnknownShape("x".into()).into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
