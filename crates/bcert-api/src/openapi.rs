//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into one OpenAPI document served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// OpenAPI document for the issuer API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blockcerts Issuer API",
        version = "0.1.0",
        description = "Issue Blockcerts certificates, attach Ethereum anchor proofs, and serve certificates and the issuer profile.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::health::root,
        crate::routes::certificates::generate,
        crate::routes::certificates::add_proof,
        crate::routes::certificates::get_certificate,
        crate::routes::issuer::issuer_profile,
    ),
    components(schemas(
        crate::routes::certificates::GenerateRequest,
        crate::routes::certificates::GenerateResponse,
        crate::routes::certificates::AddProofRequest,
        crate::routes::certificates::AddProofResponse,
    )),
    tags(
        (name = "certificates", description = "Certificate issuance and lookup"),
        (name = "issuer", description = "Issuer profile"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
