//! # Health Routes
//!
//! - `GET /` — banner string, kept for clients that poll the root.
//! - `GET /health/liveness` — 200 while the process runs.
//! - `GET /health/readiness` — 200 once the router is serving.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Body of `GET /`.
pub const ROOT_BANNER: &str = "Blockcerts Backend Running 🚀";

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// GET / — Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = String, content_type = "text/plain")),
    tag = "health"
)]
async fn root() -> &'static str {
    ROOT_BANNER
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the store is in memory, so serving means ready.
async fn readiness() -> &'static str {
    "ready"
}
