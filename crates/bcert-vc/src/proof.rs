//! # Anchor Proofs
//!
//! The proof record attached to a certificate once its fingerprint has been
//! anchored in an Ethereum transaction by an external party.
//!
//! The record is bookkeeping only: the transaction reference is stored as
//! supplied and is not checked against any chain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use bcert_core::Timestamp;

/// The type of proof attached to a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofType {
    /// Certificate hash written into an Ethereum transaction.
    EthereumHashProof,
}

impl std::fmt::Display for ProofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofType::EthereumHashProof => write!(f, "EthereumHashProof"),
        }
    }
}

/// The purpose of a proof, per the W3C VC Data Integrity vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProofPurpose {
    /// The issuer asserts the credential claims are true.
    AssertionMethod,
}

impl std::fmt::Display for ProofPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofPurpose::AssertionMethod => write!(f, "assertionMethod"),
        }
    }
}

/// How the hash is carried inside the anchoring transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorType {
    /// Hash in the transaction data field.
    #[serde(rename = "ETHData")]
    EthData,
}

/// Chain the anchoring transaction lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Ethereum Sepolia testnet.
    Sepolia,
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chain::Sepolia => write!(f, "sepolia"),
        }
    }
}

/// A proof record on a certificate.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    #[serde(rename = "type")]
    pub proof_type: ProofType,

    /// When the proof was attached.
    pub created: Timestamp,

    #[serde(rename = "proofPurpose")]
    pub proof_purpose: ProofPurpose,

    #[serde(rename = "anchorType")]
    pub anchor_type: AnchorType,

    pub chain: Chain,

    /// Transaction reference exactly as supplied by the caller.
    #[serde(
        rename = "transactionId",
        default,
        deserialize_with = "crate::credential::deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_id: Option<Value>,
}

impl ProofRecord {
    /// A Sepolia `EthereumHashProof` created now.
    pub fn ethereum_anchor(transaction_id: Option<Value>) -> Self {
        Self::ethereum_anchor_at(transaction_id, Timestamp::now())
    }

    /// A Sepolia `EthereumHashProof` with an explicit creation time.
    pub fn ethereum_anchor_at(transaction_id: Option<Value>, created: Timestamp) -> Self {
        Self {
            proof_type: ProofType::EthereumHashProof,
            created,
            proof_purpose: ProofPurpose::AssertionMethod,
            anchor_type: AnchorType::EthData,
            chain: Chain::Sepolia,
            transaction_id,
        }
    }
}
