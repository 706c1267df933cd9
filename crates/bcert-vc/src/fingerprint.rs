//! # Certificate Fingerprint
//!
//! The integrity hash returned when a certificate is generated: SHA-256
//! over the compact, insertion-ordered JSON of the document without its
//! proof. It is computed once at creation and never recomputed; attaching a
//! proof later does not change what the fingerprint covers.

use bcert_core::{sha256_digest, ContentDigest, DocumentBytes};

use crate::credential::{Certificate, VcError};

/// Compute the fingerprint of a certificate.
///
/// Any attached proof is excluded, so the value is the same before and
/// after proof attachment.
pub fn fingerprint(certificate: &Certificate) -> Result<ContentDigest, VcError> {
    let bytes = if certificate.proof().is_some() {
        DocumentBytes::new(&certificate.without_proof())?
    } else {
        DocumentBytes::new(certificate)?
    };
    Ok(sha256_digest(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CredentialBuilder, CredentialClaim};
    use crate::issuer::IssuerMetadata;
    use crate::proof::ProofRecord;
    use crate::shape::ShapeKind;
    use proptest::prelude::*;
    use serde_json::json;

    fn claim(name: &str, course: &str, date: &str) -> CredentialClaim {
        CredentialClaim {
            name: Some(json!(name)),
            course: Some(json!(course)),
            date: Some(json!(date)),
        }
    }

    #[test]
    fn fingerprint_is_hash_of_document_json() {
        let builder = CredentialBuilder::new(ShapeKind::Blockcerts, IssuerMetadata::default());
        let issued = builder.build(&claim("Alice", "Rust Basics", "2024-05-01"));
        let json = serde_json::to_vec(&issued.certificate).unwrap();
        let expected = sha256_digest(&DocumentBytes::new(&issued.certificate).unwrap());
        assert_eq!(fingerprint(&issued.certificate).unwrap(), expected);
        assert_eq!(DocumentBytes::new(&issued.certificate).unwrap().as_bytes(), json.as_slice());
    }

    #[test]
    fn fingerprint_differs_between_shapes() {
        let c = claim("Alice", "Rust Basics", "2024-05-01");
        let a = CredentialBuilder::new(ShapeKind::Blockcerts, IssuerMetadata::default()).build(&c);
        let b = CredentialBuilder::new(ShapeKind::Flat, IssuerMetadata::default()).build(&c);
        assert_ne!(
            fingerprint(&a.certificate).unwrap(),
            fingerprint(&b.certificate).unwrap()
        );
    }

    proptest! {
        #[test]
        fn proof_attachment_does_not_change_fingerprint(
            name in ".*",
            course in ".*",
            date in ".*",
            tx in "0x[0-9a-f]{0,64}",
        ) {
            for kind in [ShapeKind::Blockcerts, ShapeKind::Flat] {
                let builder = CredentialBuilder::new(kind, IssuerMetadata::default());
                let mut cert = builder.build(&claim(&name, &course, &date)).certificate;
                let before = fingerprint(&cert).unwrap();
                cert.set_proof(ProofRecord::ethereum_anchor(Some(json!(tx.clone()))));
                prop_assert_eq!(fingerprint(&cert).unwrap(), before);
            }
        }
    }
}
