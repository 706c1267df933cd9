//! # Certificate Registry
//!
//! The certificate store proper: issued documents keyed by id, each with
//! the fingerprint computed when it was created.
//!
//! ## Lifecycle
//!
//! ```text
//! Created ──attach_proof──▶ Proofed ──attach_proof──▶ Proofed (overwrite)
//! ```
//!
//! There is no terminal state and nothing is ever removed; records live as
//! long as the process. The status is derived from the document itself
//! (proof present or not), so it cannot drift from what is served.

use serde_json::Value;
use thiserror::Error;

use bcert_core::{CertificateId, ContentDigest, Timestamp};
use bcert_vc::{Certificate, ProofRecord};

use crate::store::Store;

/// Errors from certificate store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No certificate was ever issued under this id.
    #[error("certificate {0} not found")]
    NotFound(CertificateId),
}

/// Where a certificate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateStatus {
    /// Issued, no proof attached.
    Created,
    /// A proof has been attached at least once.
    Proofed,
}

impl CertificateStatus {
    fn of(certificate: &Certificate) -> Self {
        if certificate.proof().is_some() {
            Self::Proofed
        } else {
            Self::Created
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Proofed => f.write_str("proofed"),
        }
    }
}

/// A stored certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateRecord {
    /// The document as served.
    pub certificate: Certificate,
    /// Fingerprint taken at creation. Never recomputed.
    pub hash: ContentDigest,
}

impl CertificateRecord {
    pub fn status(&self) -> CertificateStatus {
        CertificateStatus::of(&self.certificate)
    }
}

/// Thread-safe in-memory certificate store.
///
/// Constructed once at startup and handed to the HTTP layer through
/// application state. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct CertificateStore {
    records: Store<CertificateRecord>,
}

impl CertificateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the certificate at `id`.
    pub fn put(&self, id: CertificateId, certificate: Certificate, hash: ContentDigest) {
        self.records.insert(id, CertificateRecord { certificate, hash });
    }

    /// The certificate issued under `id`.
    pub fn get(&self, id: &CertificateId) -> Result<Certificate, StoreError> {
        self.record(id).map(|r| r.certificate)
    }

    /// The full record (document and creation fingerprint) for `id`.
    pub fn record(&self, id: &CertificateId) -> Result<CertificateRecord, StoreError> {
        self.records.get(id).ok_or(StoreError::NotFound(*id))
    }

    /// Attach an `EthereumHashProof` carrying `transaction_id`, created now.
    ///
    /// Overwrites any previous proof. Returns the status the certificate
    /// had before this call, so callers can tell a first attachment from an
    /// overwrite.
    pub fn attach_proof(
        &self,
        id: &CertificateId,
        transaction_id: Option<Value>,
    ) -> Result<CertificateStatus, StoreError> {
        self.attach_proof_at(id, transaction_id, Timestamp::now())
    }

    /// [`attach_proof`](Self::attach_proof) with an explicit creation time.
    pub fn attach_proof_at(
        &self,
        id: &CertificateId,
        transaction_id: Option<Value>,
        created: Timestamp,
    ) -> Result<CertificateStatus, StoreError> {
        self.records
            .update(id, |record| {
                let previous = record.status();
                record
                    .certificate
                    .set_proof(ProofRecord::ethereum_anchor_at(transaction_id, created));
                previous
            })
            .ok_or(StoreError::NotFound(*id))
    }

    /// Current lifecycle status of `id`.
    pub fn status(&self, id: &CertificateId) -> Result<CertificateStatus, StoreError> {
        self.record(id).map(|r| r.status())
    }

    /// Whether a certificate exists under `id`.
    pub fn contains(&self, id: &CertificateId) -> bool {
        self.records.contains(id)
    }

    /// Number of certificates issued so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no certificate has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
