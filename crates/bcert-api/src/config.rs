//! # Service Configuration
//!
//! Read once at startup from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `5000` |
//! | `CERT_SHAPE` | `blockcerts` (or `flat`) |
//! | `ISSUER_ID` | `https://your-domain.com/issuer.json` |
//! | `ISSUER_NAME` | `Blockchain Academy` |
//! | `ISSUER_URL` | `https://your-domain.com` |
//! | `ISSUER_EMAIL` | `admin@academy.com` |
//! | `ISSUER_PUBLIC_KEY` | `ecdsa-koblitz-pubkey:YOUR_PUBLIC_KEY` |
//! | `ISSUER_KEY_CREATED` | `2024-01-01T00:00:00Z` |
//! | `LOG_FORMAT` | `text` (or `json`) |
//!
//! Unset and blank variables take the default. An unparseable `PORT` falls
//! back to the default; an unknown `CERT_SHAPE` is a startup error.

use thiserror::Error;

use bcert_vc::{IssuerMetadata, ShapeKind, VcError};

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid CERT_SHAPE: {0}")]
    InvalidShape(#[from] VcError),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else is text.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match env_value(&lookup, "LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Read `LOG_FORMAT` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Certificate layout produced by `/generate`.
    pub shape: ShapeKind,
    /// Issuer embedded in every certificate and served at `/issuer.json`.
    pub issuer: IssuerMetadata,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            shape: ShapeKind::default(),
            issuer: IssuerMetadata::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = IssuerMetadata::default();

        let port = env_value(&lookup, "PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let shape = match env_value(&lookup, "CERT_SHAPE") {
            Some(s) => s.parse::<ShapeKind>()?,
            None => ShapeKind::default(),
        };

        let issuer = IssuerMetadata {
            id: env_value(&lookup, "ISSUER_ID").unwrap_or(defaults.id),
            name: env_value(&lookup, "ISSUER_NAME").unwrap_or(defaults.name),
            url: env_value(&lookup, "ISSUER_URL").unwrap_or(defaults.url),
            email: env_value(&lookup, "ISSUER_EMAIL").unwrap_or(defaults.email),
            public_key: env_value(&lookup, "ISSUER_PUBLIC_KEY").unwrap_or(defaults.public_key),
            key_created: env_value(&lookup, "ISSUER_KEY_CREATED").unwrap_or(defaults.key_created),
        };

        Ok(Self {
            port,
            shape,
            issuer,
            log_format: LogFormat::from_lookup(&lookup),
        })
    }
}

/// Trimmed value of `key`, or `None` when unset or blank.
fn env_value(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
