//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps pipeline rejections from candor-core to HTTP status codes and
//! returns JSON error bodies with a machine-readable code. Internal error
//! details are logged, never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use candor_core::SubmissionError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "DUPLICATE_SUBMISSION").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The nullifier tuple was already consumed (409).
    #[error("duplicate submission: {0}")]
    Duplicate(String),

    /// The eligibility proof was empty, malformed, or rejected (422).
    #[error("proof verification failed")]
    ProofRejected,

    /// The content signature did not verify (422).
    #[error("invalid signature")]
    SignatureRejected,

    /// Structurally invalid request content (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Duplicate(_) => (StatusCode::CONFLICT, "DUPLICATE_SUBMISSION"),
            Self::ProofRejected => (StatusCode::UNPROCESSABLE_ENTITY, "PROOF_VERIFICATION_FAILED"),
            Self::SignatureRejected => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SIGNATURE"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Duplicate(_) => tracing::info!(error = %self, "duplicate submission rejected"),
            _ => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert pipeline rejections to API errors.
///
/// A storage-level nullifier conflict arrives here already folded into
/// `DuplicateSubmission`, so the two race outcomes share one status code.
impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::DuplicateSubmission => Self::Duplicate(err.to_string()),
            SubmissionError::ProofVerificationFailed => Self::ProofRejected,
            SubmissionError::InvalidSignature => Self::SignatureRejected,
            SubmissionError::MalformedInput(msg) => Self::Validation(msg),
            SubmissionError::Storage(msg) => Self::Internal(msg),
        }
    }
}
