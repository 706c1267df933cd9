//! # Credential Builder
//!
//! Pure construction of certificate documents. The builder owns the issuer
//! metadata, the configured [`DocumentShape`] and the [`IdGenerator`]; each
//! [`CredentialBuilder::build()`] call draws a fresh id and assembles one
//! document. Storing the result is the caller's job.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use bcert_core::{CertificateId, IdGenerator, RandomIds};

use crate::credential::{deserialize_present, Certificate};
use crate::issuer::IssuerMetadata;
use crate::shape::{DocumentShape, ShapeKind};

/// The caller-supplied part of a certificate.
///
/// Every field is optional and unvalidated. `None` means the field was not
/// supplied at all; `Some(Value::Null)` means it was supplied as `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CredentialClaim {
    /// Recipient name.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<Value>,
    /// Course or badge name.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub course: Option<Value>,
    /// Issuance date in any date-like form.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub date: Option<Value>,
}

/// A freshly built certificate and the id it was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedCertificate {
    pub id: CertificateId,
    pub certificate: Certificate,
}

/// Builds certificates of one shape for one issuer.
#[derive(Debug, Clone)]
pub struct CredentialBuilder {
    shape: Arc<dyn DocumentShape>,
    ids: Arc<dyn IdGenerator>,
    issuer: IssuerMetadata,
}

impl CredentialBuilder {
    /// A builder for `kind` documents with random UUID v4 ids.
    pub fn new(kind: ShapeKind, issuer: IssuerMetadata) -> Self {
        Self {
            shape: Arc::from(kind.shape()),
            ids: Arc::new(RandomIds),
            issuer,
        }
    }

    /// Replace the id-generation strategy.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// The configured document layout.
    pub fn shape(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// The issuer embedded in every certificate.
    pub fn issuer(&self) -> &IssuerMetadata {
        &self.issuer
    }

    /// Build a certificate for `claim` under a freshly generated id.
    pub fn build(&self, claim: &CredentialClaim) -> IssuedCertificate {
        let id = self.ids.generate_id();
        let certificate = self.shape.assemble(id, claim, &self.issuer);
        IssuedCertificate { id, certificate }
    }
}
