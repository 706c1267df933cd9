//! # bcert-core — Foundational Types for the Blockcerts Issuer
//!
//! Leaf crate of the workspace. Every other `bcert-*` crate depends on it;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** Certificates are addressed by [`CertificateId`],
//!    never by bare strings. Id generation sits behind the [`IdGenerator`]
//!    trait so the strategy is swappable and injectable in tests.
//!
//! 2. **`DocumentBytes` newtype.** ALL digest computation flows through
//!    [`DocumentBytes::new()`]. The bytes are compact JSON in field/key
//!    insertion order. Keys are NOT sorted: the certificate fingerprint is
//!    defined over the document exactly as it was assembled.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] is UTC with millisecond
//!    precision and always renders as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
//!
//! 4. **`sha256_digest()` accepts only `&DocumentBytes`.** Compile-time
//!    enforcement that every fingerprint is taken over serialized documents.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bcert-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod document;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use document::{format_js_number, DocumentBytes};
pub use error::{BcertError, SerializationError};
pub use identity::{CertificateId, IdGenerator, RandomIds};
pub use temporal::Timestamp;
