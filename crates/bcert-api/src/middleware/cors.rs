//! # CORS
//!
//! Browser clients on any origin may call the issuer.

use tower_http::cors::CorsLayer;

/// Allow every origin, method and header.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
