//! # Certificate Identity
//!
//! The [`CertificateId`] newtype and the [`IdGenerator`] capability that
//! produces fresh identifiers at certificate creation time.
//!
//! ## Uniqueness Invariant
//!
//! An id must be unique across all certificates created in the process
//! lifetime. The shipped strategy, [`RandomIds`], draws UUID v4 values.
//! Coarse timestamp-derived ids are not offered: two requests inside the
//! same tick would collide and silently overwrite each other in the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of an issued certificate.
///
/// Serializes as the bare hyphenated UUID (`xxxxxxxx-xxxx-4xxx-xxxx-xxxxxxxxxxxx`).
/// Document shapes decide how the id is rendered inside the credential
/// (for example `urn:uuid:` prefixed); the store is always keyed by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(Uuid);

impl CertificateId {
    /// Generate a new random certificate identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an identifier exactly as issued.
    ///
    /// Only the lowercase hyphenated form is accepted. Other spellings the
    /// `uuid` crate understands (`urn:uuid:` prefix, braces, simple hex,
    /// uppercase) were never handed out as certificate ids, so they do not
    /// resolve to one.
    pub fn parse(s: &str) -> Option<Self> {
        let uuid = Uuid::try_parse(s).ok()?;
        if uuid.hyphenated().to_string() == s {
            Some(Self(uuid))
        } else {
            None
        }
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CertificateId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Strategy for producing fresh certificate identifiers.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Produce an identifier not previously returned in this process.
    fn generate_id(&self) -> CertificateId;
}

/// Cryptographically random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate_id(&self) -> CertificateId {
        CertificateId::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_ids_are_unique() {
        let ids: HashSet<CertificateId> = (0..1000).map(|_| RandomIds.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn random_ids_are_v4() {
        let id = RandomIds.generate_id();
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn display_is_lowercase_hyphenated() {
        let id = CertificateId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s, s.to_lowercase());
        assert_eq!(s.matches('-').count(), 4);
    }

    #[test]
    fn parse_roundtrips_display() {
        let id = CertificateId::new();
        assert_eq!(CertificateId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn parse_rejects_other_spellings() {
        let id = CertificateId::new();
        let hyphenated = id.to_string();
        assert!(CertificateId::parse(&format!("urn:uuid:{hyphenated}")).is_none());
        assert!(CertificateId::parse(&hyphenated.to_uppercase()).is_none());
        assert!(CertificateId::parse(&format!("{{{hyphenated}}}")).is_none());
        assert!(CertificateId::parse(&hyphenated.replace('-', "")).is_none());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(CertificateId::parse("").is_none());
        assert!(CertificateId::parse("undefined").is_none());
        assert!(CertificateId::parse("not-a-uuid").is_none());
    }

    #[test]
    fn serde_is_transparent() {
        let id = CertificateId::parse("123e4567-e89b-42d3-a456-426614174000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""123e4567-e89b-42d3-a456-426614174000""#);
        let back: CertificateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
