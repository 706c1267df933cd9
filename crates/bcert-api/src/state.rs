//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Built once at startup; clones share the same
//! certificate store.

use std::sync::Arc;

use bcert_state::CertificateStore;
use bcert_vc::{CredentialBuilder, IssuerProfile};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Issued certificates.
    pub certificates: CertificateStore,
    /// Builds certificates of the configured shape for the configured issuer.
    pub builder: CredentialBuilder,
    /// Configuration the state was built from.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with default configuration and an empty store.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State for `config` with an empty store.
    pub fn with_config(config: AppConfig) -> Self {
        let builder = CredentialBuilder::new(config.shape, config.issuer.clone());
        Self {
            certificates: CertificateStore::new(),
            builder,
            config: Arc::new(config),
        }
    }

    /// Replace the credential builder, e.g. to pin the id generator.
    pub fn with_builder(mut self, builder: CredentialBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// The issuer profile document served at `/issuer.json`.
    pub fn issuer_profile(&self) -> IssuerProfile {
        self.builder.issuer().profile()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
