//! # Content Digest
//!
//! SHA-256 fingerprints over [`DocumentBytes`].
//!
//! ## Security Invariant
//!
//! [`sha256_digest()`] accepts only `&DocumentBytes`, never raw `&[u8]`, so
//! every digest in the system was taken over a serialized document.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::document::DocumentBytes;

/// A 32-byte SHA-256 digest.
///
/// Renders (and serializes) as 64 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Compute a SHA-256 digest of serialized document bytes.
pub fn sha256_digest(data: &DocumentBytes) -> ContentDigest {
    let hash = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest(bytes)
}

/// Compute a SHA-256 digest and render it as hex.
pub fn sha256_hex(data: &DocumentBytes) -> String {
    sha256_digest(data).to_hex()
}
