//! # Certificate Routes
//!
//! - `POST /generate` — build, fingerprint and store a certificate.
//! - `POST /add-proof` — attach an `EthereumHashProof` to a stored certificate.
//! - `GET /certificates/{id}` — fetch a stored certificate.
//!
//! Request bodies go through [`LenientJson`]: nothing here returns 400.
//! Unknown ids, including ids that are not UUIDs at all, are 404.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use bcert_core::CertificateId;
use bcert_state::CertificateStatus;
use bcert_vc::{deserialize_present, fingerprint, Certificate, CredentialClaim, ShapeKind};

use crate::error::AppError;
use crate::extractors::LenientJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request body for certificate generation.
///
/// Values are embedded into the certificate as given; none are validated.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Recipient name.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<Object>)]
    pub name: Option<Value>,
    /// Course or badge name.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<Object>)]
    pub course: Option<Value>,
    /// Issuance date: RFC 3339, `YYYY-MM-DD`, or epoch milliseconds.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<Object>)]
    pub date: Option<Value>,
}

impl From<GenerateRequest> for CredentialClaim {
    fn from(req: GenerateRequest) -> Self {
        CredentialClaim {
            name: req.name,
            course: req.course,
            date: req.date,
        }
    }
}

/// Response from certificate generation.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    /// `Certificate generated` for Blockcerts certificates; absent for flat ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Id to fetch the certificate with.
    #[serde(rename = "certificateId")]
    #[schema(value_type = String)]
    pub certificate_id: CertificateId,
    /// SHA-256 of the certificate JSON, lowercase hex.
    pub hash: String,
    /// The stored certificate.
    #[schema(value_type = Object)]
    pub certificate: Certificate,
}

/// Request body for proof attachment.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddProofRequest {
    /// Id returned by `/generate`.
    #[serde(rename = "certificateId", default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub certificate_id: Option<Value>,
    /// Transaction that anchors the certificate hash. Stored as given.
    #[serde(rename = "txHash", default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub tx_hash: Option<Value>,
}

/// Response from proof attachment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddProofResponse {
    pub message: String,
}

const GENERATED_MESSAGE: &str = "Certificate generated";
const PROOF_ADDED_MESSAGE: &str = "Proof added successfully";

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the certificates router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/add-proof", post(add_proof))
        .route("/certificates/{id}", get(get_certificate))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /generate — Issue a certificate.
///
/// Builds the configured document shape under a fresh id, hashes it, and
/// stores it. Always succeeds for any body.
#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Certificate generated", body = GenerateResponse),
    ),
    tag = "certificates"
)]
async fn generate(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let claim = CredentialClaim::from(req);
    let issued = state.builder.build(&claim);
    let hash = fingerprint(&issued.certificate)?;

    state
        .certificates
        .put(issued.id, issued.certificate.clone(), hash);

    let shape = issued.certificate.shape();
    tracing::info!(
        certificate_id = %issued.id,
        shape = %shape,
        hash = %hash,
        "certificate generated"
    );

    let message = match shape {
        ShapeKind::Blockcerts => Some(GENERATED_MESSAGE.to_string()),
        ShapeKind::Flat => None,
    };

    Ok(Json(GenerateResponse {
        message,
        certificate_id: issued.id,
        hash: hash.to_hex(),
        certificate: issued.certificate,
    }))
}

/// POST /add-proof — Attach an Ethereum anchor proof.
///
/// Overwrites any proof already attached. The transaction reference is not
/// checked.
#[utoipa::path(
    post,
    path = "/add-proof",
    request_body = AddProofRequest,
    responses(
        (status = 200, description = "Proof attached", body = AddProofResponse),
        (status = 404, description = "Certificate not found", body = String, content_type = "text/plain"),
    ),
    tag = "certificates"
)]
async fn add_proof(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<AddProofRequest>,
) -> Result<Json<AddProofResponse>, AppError> {
    let id = resolve_body_id(req.certificate_id.as_ref())?;
    let previous = state.certificates.attach_proof(&id, req.tx_hash)?;

    if previous == CertificateStatus::Proofed {
        tracing::warn!(certificate_id = %id, "replacing existing proof");
    }
    tracing::info!(
        certificate_id = %id,
        previous_status = %previous,
        "proof attached"
    );

    Ok(Json(AddProofResponse {
        message: PROOF_ADDED_MESSAGE.to_string(),
    }))
}

/// GET /certificates/{id} — Fetch a stored certificate.
#[utoipa::path(
    get,
    path = "/certificates/{id}",
    params(("id" = String, Path, description = "Certificate id returned by /generate")),
    responses(
        (status = 200, description = "The certificate", body = serde_json::Value),
        (status = 404, description = "Certificate not found", body = String, content_type = "text/plain"),
    ),
    tag = "certificates"
)]
async fn get_certificate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Certificate>, AppError> {
    let id = CertificateId::parse(&id)
        .ok_or_else(|| AppError::NotFound(format!("certificate {id} not found")))?;
    Ok(Json(state.certificates.get(&id)?))
}

/// Resolve the `certificateId` of a request body to an issued id.
fn resolve_body_id(raw: Option<&Value>) -> Result<CertificateId, AppError> {
    match raw {
        Some(Value::String(s)) => CertificateId::parse(s)
            .ok_or_else(|| AppError::NotFound(format!("certificate {s} not found"))),
        Some(other) => Err(AppError::NotFound(format!("certificate {other} not found"))),
        None => Err(AppError::NotFound("no certificate id supplied".to_string())),
    }
}
