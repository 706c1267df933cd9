//! # Document Shapes
//!
//! A [`DocumentShape`] turns a certificate id, the caller's claim and the
//! issuer metadata into a [`Certificate`] document. Two shapes ship:
//!
//! - [`BlockcertsShape`]: Blockcerts v2 verifiable credential, with the
//!   issuance date normalized to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
//! - [`FlatShape`]: a flat record with the issuance date passed through.
//!
//! One shape is chosen at configuration time via [`ShapeKind`]. The two
//! layouts are deliberately not merged: their field names differ and so do
//! their hashes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use bcert_core::{CertificateId, Timestamp};

use crate::builder::CredentialClaim;
use crate::credential::{
    badge_description, Badge, BlockcertsCredential, Certificate, CredentialSubject,
    FlatCertificate, Recipient, VcError, CREDENTIALS_V1_CONTEXT,
};
use crate::issuer::{IssuerMetadata, BLOCKCERTS_V2_CONTEXT};

/// Which certificate layout the issuer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Blockcerts v2 verifiable credential.
    #[default]
    Blockcerts,
    /// Flat record.
    Flat,
}

impl ShapeKind {
    /// Lowercase configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Blockcerts => "blockcerts",
            ShapeKind::Flat => "flat",
        }
    }

    /// The shape implementation for this kind.
    pub fn shape(&self) -> Box<dyn DocumentShape> {
        match self {
            ShapeKind::Blockcerts => Box::new(BlockcertsShape),
            ShapeKind::Flat => Box::new(FlatShape),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = VcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blockcerts" => Ok(ShapeKind::Blockcerts),
            "flat" => Ok(ShapeKind::Flat),
            _ => Err(VcError::UnknownShape(s.to_string())),
        }
    }
}

/// Assembles certificate documents of one layout.
pub trait DocumentShape: Send + Sync + std::fmt::Debug {
    /// The layout this shape produces.
    fn kind(&self) -> ShapeKind;

    /// Build the document for `id` from the claim and issuer metadata.
    ///
    /// Never fails: malformed or missing claim fields are embedded as given.
    fn assemble(
        &self,
        id: CertificateId,
        claim: &CredentialClaim,
        issuer: &IssuerMetadata,
    ) -> Certificate;
}

/// Blockcerts v2 verifiable-credential layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockcertsShape;

impl BlockcertsShape {
    /// Normalize a supplied issuance date.
    ///
    /// Parseable dates render as `YYYY-MM-DDTHH:MM:SS.mmmZ`. Anything else is
    /// kept verbatim.
    pub fn normalize_date(id: CertificateId, date: Option<&Value>) -> Option<Value> {
        let raw = date?;
        match Timestamp::from_date_like(raw) {
            Some(ts) => Some(Value::String(ts.to_iso8601())),
            None => {
                tracing::warn!(
                    certificate_id = %id,
                    issuance_date = %raw,
                    "issuance date not recognized, embedding as supplied"
                );
                Some(raw.clone())
            }
        }
    }
}

impl DocumentShape for BlockcertsShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Blockcerts
    }

    fn assemble(
        &self,
        id: CertificateId,
        claim: &CredentialClaim,
        issuer: &IssuerMetadata,
    ) -> Certificate {
        Certificate::Blockcerts(BlockcertsCredential {
            context: vec![
                CREDENTIALS_V1_CONTEXT.to_string(),
                BLOCKCERTS_V2_CONTEXT.to_string(),
            ],
            id: format!("urn:uuid:{id}"),
            credential_type: vec![
                "VerifiableCredential".to_string(),
                "BlockcertsCredential".to_string(),
            ],
            issuer: issuer.reference(),
            issuance_date: Self::normalize_date(id, claim.date.as_ref()),
            credential_subject: CredentialSubject {
                id: format!("did:example:{id}"),
                subject_type: "Person".to_string(),
                name: claim.name.clone(),
            },
            badge: Badge {
                badge_type: Some("BadgeClass".to_string()),
                name: claim.course.clone(),
                description: badge_description(claim.course.as_ref()),
            },
            proof: None,
        })
    }
}

/// Flat record layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatShape;

impl DocumentShape for FlatShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Flat
    }

    fn assemble(
        &self,
        id: CertificateId,
        claim: &CredentialClaim,
        issuer: &IssuerMetadata,
    ) -> Certificate {
        Certificate::Flat(FlatCertificate {
            id: id.to_string(),
            recipient: Recipient {
                name: claim.name.clone(),
            },
            badge: Badge {
                badge_type: None,
                name: claim.course.clone(),
                description: badge_description(claim.course.as_ref()),
            },
            issuer: issuer.flat(),
            issuance_date: claim.date.clone(),
            proof: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> CredentialClaim {
        CredentialClaim {
            name: Some(json!("Alice")),
            course: Some(json!("Rust Basics")),
            date: Some(json!("2024-05-01")),
        }
    }

    fn fixed_id() -> CertificateId {
        CertificateId::parse("123e4567-e89b-42d3-a456-426614174000").unwrap()
    }

    #[test]
    fn shape_kind_parses_case_insensitively() {
        assert_eq!("blockcerts".parse::<ShapeKind>().unwrap(), ShapeKind::Blockcerts);
        assert_eq!("FLAT".parse::<ShapeKind>().unwrap(), ShapeKind::Flat);
        assert_eq!(" Flat ".parse::<ShapeKind>().unwrap(), ShapeKind::Flat);
    }

    #[test]
    fn shape_kind_rejects_unknown() {
        let err = "w3c".parse::<ShapeKind>().unwrap_err();
        assert!(matches!(err, VcError::UnknownShape(ref s) if s == "w3c"));
    }

    #[test]
    fn shape_kind_default_and_display() {
        assert_eq!(ShapeKind::default(), ShapeKind::Blockcerts);
        assert_eq!(ShapeKind::Flat.to_string(), "flat");
        assert_eq!(serde_json::to_string(&ShapeKind::Blockcerts).unwrap(), "\"blockcerts\"");
    }

    #[test]
    fn kind_selects_matching_shape() {
        assert_eq!(ShapeKind::Blockcerts.shape().kind(), ShapeKind::Blockcerts);
        assert_eq!(ShapeKind::Flat.shape().kind(), ShapeKind::Flat);
    }

    #[test]
    fn blockcerts_document_layout() {
        let cert = BlockcertsShape.assemble(fixed_id(), &alice(), &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["id"], "urn:uuid:123e4567-e89b-42d3-a456-426614174000");
        assert_eq!(
            value["credentialSubject"],
            json!({"id": "did:example:123e4567-e89b-42d3-a456-426614174000", "type": "Person", "name": "Alice"})
        );
        assert_eq!(value["issuanceDate"], "2024-05-01T00:00:00.000Z");
        assert_eq!(
            value["badge"],
            json!({"type": "BadgeClass", "name": "Rust Basics", "description": "Completed Rust Basics course"})
        );
        assert!(value.get("proof").is_none());
    }

    #[test]
    fn blockcerts_keeps_unparseable_date_verbatim() {
        let claim = CredentialClaim {
            date: Some(json!("next tuesday")),
            ..alice()
        };
        let cert = BlockcertsShape.assemble(fixed_id(), &claim, &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["issuanceDate"], "next tuesday");
    }

    #[test]
    fn blockcerts_epoch_millis_date() {
        let claim = CredentialClaim {
            date: Some(json!(1_714_521_600_123_i64)),
            ..alice()
        };
        let cert = BlockcertsShape.assemble(fixed_id(), &claim, &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["issuanceDate"], "2024-05-01T00:00:00.123Z");
    }

    #[test]
    fn blockcerts_null_date_is_the_epoch() {
        let claim = CredentialClaim {
            date: Some(Value::Null),
            ..alice()
        };
        let cert = BlockcertsShape.assemble(fixed_id(), &claim, &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["issuanceDate"], "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn blockcerts_missing_fields_are_omitted() {
        let cert = BlockcertsShape.assemble(
            fixed_id(),
            &CredentialClaim::default(),
            &IssuerMetadata::default(),
        );
        let value = serde_json::to_value(&cert).unwrap();
        assert!(value.get("issuanceDate").is_none());
        assert!(value["credentialSubject"].get("name").is_none());
        assert!(value["badge"].get("name").is_none());
        assert_eq!(value["badge"]["description"], "Completed undefined course");
    }

    #[test]
    fn flat_document_passes_date_through() {
        let claim = CredentialClaim {
            date: Some(json!("01/05/2024")),
            ..alice()
        };
        let cert = FlatShape.assemble(fixed_id(), &claim, &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["id"], "123e4567-e89b-42d3-a456-426614174000");
        assert_eq!(value["recipient"], json!({"name": "Alice"}));
        assert_eq!(value["issuanceDate"], "01/05/2024");
        assert!(value["badge"].get("type").is_none());
        assert_eq!(value["issuer"]["publicKey"], "ecdsa-koblitz-pubkey:YOUR_PUBLIC_KEY");
    }

    #[test]
    fn non_string_claim_values_are_embedded_as_is() {
        let claim = CredentialClaim {
            name: Some(json!({"given": "Ada", "family": "Lovelace"})),
            course: Some(json!(42)),
            date: Some(Value::Null),
        };
        let cert = FlatShape.assemble(fixed_id(), &claim, &IssuerMetadata::default());
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["recipient"]["name"], json!({"given": "Ada", "family": "Lovelace"}));
        assert_eq!(value["badge"]["name"], 42);
        assert_eq!(value["badge"]["description"], "Completed 42 course");
        assert_eq!(value["issuanceDate"], Value::Null);
    }
}
