//! # bcert-state — Certificate Lifecycle and Storage
//!
//! - **Store** (`store.rs`): generic `Arc<RwLock<HashMap>>` map keyed by
//!   [`CertificateId`](bcert_core::CertificateId).
//! - **Registry** (`registry.rs`): [`CertificateStore`], the issued
//!   certificates with their creation fingerprints, and the
//!   `Created → Proofed` lifecycle.
//!
//! Everything lives in process memory and is lost on exit.

pub mod registry;
pub mod store;

pub use registry::{CertificateRecord, CertificateStatus, CertificateStore, StoreError};
pub use store::Store;
