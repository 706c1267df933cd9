//! # Issuer Profile Route
//!
//! `GET /issuer.json` serves the Blockcerts issuer profile. Blockcerts
//! credentials point their `issuer.id` at this document, so it is mounted
//! only when the service issues Blockcerts certificates.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use bcert_vc::IssuerProfile;

use crate::state::AppState;

/// Build the issuer profile router.
pub fn router() -> Router<AppState> {
    Router::new().route("/issuer.json", get(issuer_profile))
}

/// GET /issuer.json — The issuer profile document.
#[utoipa::path(
    get,
    path = "/issuer.json",
    responses(
        (status = 200, description = "Blockcerts issuer profile", body = serde_json::Value),
    ),
    tag = "issuer"
)]
async fn issuer_profile(State(state): State<AppState>) -> Json<IssuerProfile> {
    Json(state.issuer_profile())
}
