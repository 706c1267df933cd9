//! # Issuer Metadata and Profile
//!
//! The issuer is a process-wide constant: configured once at startup and
//! embedded, in shape-specific form, into every certificate.
//!
//! The Blockcerts standard requires the issuer to be dereferenceable: the
//! `issuer.id` embedded in a credential is a URL at which the
//! [`IssuerProfile`] document is served.

use serde::{Deserialize, Serialize};

/// JSON-LD context of the Blockcerts v2 vocabulary.
pub const BLOCKCERTS_V2_CONTEXT: &str = "https://w3id.org/blockcerts/v2";

/// Issuer settings shared by every certificate in the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerMetadata {
    /// URL at which the issuer profile is served.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Homepage.
    pub url: String,
    /// Contact address.
    pub email: String,
    /// Public key identifier (placeholder until a real key is provisioned).
    pub public_key: String,
    /// Creation date published for the public key.
    pub key_created: String,
}

impl Default for IssuerMetadata {
    fn default() -> Self {
        Self {
            id: "https://your-domain.com/issuer.json".to_string(),
            name: "Blockchain Academy".to_string(),
            url: "https://your-domain.com".to_string(),
            email: "admin@academy.com".to_string(),
            public_key: "ecdsa-koblitz-pubkey:YOUR_PUBLIC_KEY".to_string(),
            key_created: "2024-01-01T00:00:00Z".to_string(),
        }
    }
}

impl IssuerMetadata {
    /// Issuer reference embedded in Blockcerts credentials.
    pub fn reference(&self) -> IssuerReference {
        IssuerReference {
            id: self.id.clone(),
            issuer_type: "Profile".to_string(),
            name: self.name.clone(),
        }
    }

    /// Issuer block embedded in flat certificates.
    pub fn flat(&self) -> FlatIssuer {
        FlatIssuer {
            name: self.name.clone(),
            url: self.url.clone(),
            public_key: self.public_key.clone(),
        }
    }

    /// The dereferenceable issuer profile document.
    pub fn profile(&self) -> IssuerProfile {
        IssuerProfile {
            context: BLOCKCERTS_V2_CONTEXT.to_string(),
            id: self.id.clone(),
            profile_type: "Profile".to_string(),
            name: self.name.clone(),
            url: self.url.clone(),
            email: self.email.clone(),
            public_key: vec![PublicKeyEntry {
                id: self.public_key.clone(),
                created: self.key_created.clone(),
                revoked: None,
            }],
        }
    }
}

/// `issuer` object of a Blockcerts credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerReference {
    pub id: String,
    #[serde(rename = "type")]
    pub issuer_type: String,
    pub name: String,
}

/// `issuer` object of a flat certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatIssuer {
    pub name: String,
    pub url: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Blockcerts issuer profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerProfile {
    #[serde(rename = "@context")]
    pub context: String,
    pub id: String,
    #[serde(rename = "type")]
    pub profile_type: String,
    pub name: String,
    pub url: String,
    pub email: String,
    #[serde(rename = "publicKey")]
    pub public_key: Vec<PublicKeyEntry>,
}

/// One published issuer key.
///
/// `revoked` is always written, as `null` while the key is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    pub id: String,
    pub created: String,
    pub revoked: Option<String>,
}
