//! # Certificate Documents
//!
//! The two certificate layouts the issuer can produce, and the
//! [`Certificate`] enum that carries either one through the store and the
//! HTTP layer.
//!
//! Field declaration order in every struct here is the serialization order,
//! and the serialization order is what the fingerprint covers. Reordering a
//! field changes every hash issued afterwards.
//!
//! Caller-supplied values (`name`, `course`, `date`) are arbitrary JSON and
//! are embedded untouched. An absent value is omitted from the document; an
//! explicit `null` is kept as `null`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use bcert_core::{format_js_number, SerializationError};

use crate::issuer::{FlatIssuer, IssuerReference};
use crate::proof::ProofRecord;
use crate::shape::ShapeKind;

/// Errors from credential construction and fingerprinting.
#[derive(Error, Debug)]
pub enum VcError {
    /// The document could not be serialized for hashing.
    #[error("serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    /// A shape name that is neither `blockcerts` nor `flat`.
    #[error("unknown certificate shape: {0:?} (expected \"blockcerts\" or \"flat\")")]
    UnknownShape(String),
}

/// W3C Verifiable Credentials v1 JSON-LD context.
pub const CREDENTIALS_V1_CONTEXT: &str = "https://www.w3.org/2018/credentials/v1";

/// Deserialize a field that is present in the input, even as `null`.
///
/// Paired with `#[serde(default)]`: an absent key stays `None`, while
/// `"key": null` becomes `Some(Value::Null)`. Plain `Option<Value>` would
/// collapse both to `None`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Render a course value for the badge description.
///
/// Follows JavaScript string interpolation, since clients rebuild the
/// description that way when they recompute a certificate hash. A missing
/// course is `undefined`, `null` is `null`, arrays join their elements
/// with `,` and objects render as `[object Object]`.
pub fn course_label(course: Option<&Value>) -> String {
    match course {
        None => "undefined".to_string(),
        Some(value) => interpolated(value),
    }
}

fn interpolated(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_js_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // `Array.prototype.join` renders null elements as empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => interpolated(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `Completed <course> course`.
pub fn badge_description(course: Option<&Value>) -> String {
    format!("Completed {} course", course_label(course))
}

/// Badge block shared by both shapes.
///
/// The Blockcerts shape tags it `"type": "BadgeClass"`; the flat shape has
/// no type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,

    pub description: String,
}

/// `credentialSubject` of a Blockcerts credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
    pub id: String,

    #[serde(rename = "type")]
    pub subject_type: String,

    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
}

/// A certificate in the Blockcerts v2 verifiable-credential layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockcertsCredential {
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// `urn:uuid:<certificate id>`.
    pub id: String,

    #[serde(rename = "type")]
    pub credential_type: Vec<String>,

    pub issuer: IssuerReference,

    /// Normalized `YYYY-MM-DDTHH:MM:SS.mmmZ`, or the supplied value when it
    /// could not be parsed.
    #[serde(
        rename = "issuanceDate",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub issuance_date: Option<Value>,

    #[serde(rename = "credentialSubject")]
    pub credential_subject: CredentialSubject,

    pub badge: Badge,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<ProofRecord>,
}

/// `recipient` block of a flat certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,
}

/// A certificate in the flat layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatCertificate {
    /// The bare certificate id.
    pub id: String,

    pub recipient: Recipient,

    pub badge: Badge,

    pub issuer: FlatIssuer,

    /// The date exactly as supplied.
    #[serde(
        rename = "issuanceDate",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub issuance_date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<ProofRecord>,
}

/// A certificate document in either layout.
///
/// Serializes as the inner document with no wrapper or tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Certificate {
    Blockcerts(BlockcertsCredential),
    Flat(FlatCertificate),
}

impl Certificate {
    /// The layout of this document.
    pub fn shape(&self) -> ShapeKind {
        match self {
            Certificate::Blockcerts(_) => ShapeKind::Blockcerts,
            Certificate::Flat(_) => ShapeKind::Flat,
        }
    }

    /// The attached proof, if any.
    pub fn proof(&self) -> Option<&ProofRecord> {
        match self {
            Certificate::Blockcerts(doc) => doc.proof.as_ref(),
            Certificate::Flat(doc) => doc.proof.as_ref(),
        }
    }

    /// Attach a proof, returning the one it replaced.
    pub fn set_proof(&mut self, proof: ProofRecord) -> Option<ProofRecord> {
        let slot = match self {
            Certificate::Blockcerts(doc) => &mut doc.proof,
            Certificate::Flat(doc) => &mut doc.proof,
        };
        slot.replace(proof)
    }

    /// A copy of this document with any proof removed.
    pub fn without_proof(&self) -> Certificate {
        let mut doc = self.clone();
        match &mut doc {
            Certificate::Blockcerts(d) => d.proof = None,
            Certificate::Flat(d) => d.proof = None,
        }
        doc
    }

    /// The `id` field as written in the document.
    pub fn document_id(&self) -> &str {
        match self {
            Certificate::Blockcerts(doc) => &doc.id,
            Certificate::Flat(doc) => &doc.id,
        }
    }
}
