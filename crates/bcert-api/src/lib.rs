//! # bcert-api — HTTP Service for the Blockcerts Issuer
//!
//! ## API Surface
//!
//! | Route                    | Module                    | Purpose                 |
//! |--------------------------|---------------------------|-------------------------|
//! | `GET /`                  | [`routes::health`]        | Banner                  |
//! | `POST /generate`         | [`routes::certificates`]  | Issue a certificate     |
//! | `POST /add-proof`        | [`routes::certificates`]  | Attach an anchor proof  |
//! | `GET /certificates/{id}` | [`routes::certificates`]  | Fetch a certificate     |
//! | `GET /issuer.json`       | [`routes::issuer`]        | Issuer profile (Blockcerts shape only) |
//! | `GET /health/*`          | [`routes::health`]        | Probes                  |
//! | `GET /openapi.json`      | [`openapi`]               | OpenAPI document        |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - No business logic in route handlers — delegates to `bcert-vc` and
//!   `bcert-state`.
//! - All errors map to HTTP responses via `AppError`.

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;

use bcert_vc::ShapeKind;

pub use config::{AppConfig, ConfigError, LogFormat};
pub use error::AppError;
pub use state::AppState;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(routes::health::router())
        .merge(routes::certificates::router())
        .merge(openapi::router());

    if state.builder.shape() == ShapeKind::Blockcerts {
        router = router.merge(routes::issuer::router());
    }

    router
        .layer(middleware::tracing_layer::layer())
        .layer(middleware::cors::layer())
        .with_state(state)
}
