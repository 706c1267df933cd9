//! # bcert-vc — Certificate Documents for the Blockcerts Issuer
//!
//! Provides:
//!
//! - **Document shapes** ([`BlockcertsShape`], [`FlatShape`]) behind the
//!   [`DocumentShape`] trait, selected by [`ShapeKind`].
//! - **Credential builder** ([`CredentialBuilder`]) that draws a fresh id
//!   and assembles one document per claim.
//! - **Issuer metadata** ([`IssuerMetadata`]) and the dereferenceable
//!   [`IssuerProfile`].
//! - **Anchor proofs** ([`ProofRecord`]), the `EthereumHashProof` attached
//!   once a certificate hash has been written on-chain.
//! - **Fingerprints** ([`fingerprint()`]), SHA-256 over the document JSON.
//!
//! ## Invariants
//!
//! - Document construction never fails. Missing or odd claim values are
//!   embedded as given.
//! - Fingerprints flow through [`DocumentBytes`](bcert_core::DocumentBytes)
//!   and exclude the proof.
//! - No signing. A proof records an external transaction reference and
//!   nothing more.

pub mod builder;
pub mod credential;
pub mod fingerprint;
pub mod issuer;
pub mod proof;
pub mod shape;

// Re-export primary types.
pub use builder::{CredentialBuilder, CredentialClaim, IssuedCertificate};
pub use credential::{
    badge_description, deserialize_present, Badge, BlockcertsCredential, Certificate,
    CredentialSubject, FlatCertificate, Recipient, VcError, CREDENTIALS_V1_CONTEXT,
};
pub use fingerprint::fingerprint;
pub use issuer::{
    FlatIssuer, IssuerMetadata, IssuerProfile, IssuerReference, PublicKeyEntry,
    BLOCKCERTS_V2_CONTEXT,
};
pub use proof::{AnchorType, Chain, ProofPurpose, ProofRecord, ProofType};
pub use shape::{BlockcertsShape, DocumentShape, FlatShape, ShapeKind};
