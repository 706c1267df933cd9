//! # Error Types
//!
//! Core error hierarchy. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum BcertError {
    /// A document could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// A timestamp could not be constructed or parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Error while producing [`DocumentBytes`](crate::DocumentBytes).
#[derive(Error, Debug)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
