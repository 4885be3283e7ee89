//! # Verifier Capability Trait
//!
//! Proof verification is a capability, not a concrete process: the pipeline
//! holds a `dyn ProofVerifier` and does not know whether it shells out to a
//! binary, links a verification library, or calls a remote service.

use thiserror::Error;

use crate::variant::ProofVariant;

/// Faults that prevented a verification from being evaluated at all.
///
/// These exist for observability only. At the gateway every one of them
/// collapses to "verification failed" — a submission is never accepted, and
/// never crashes the service, because the verifier was unreachable.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The verifier backend could not be invoked (missing binary, spawn
    /// failure, remote endpoint down).
    #[error("verifier unavailable: {0}")]
    Unavailable(String),

    /// Scratch-file I/O failed while staging the proof.
    #[error("verifier I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key or proof artifact was present but unusable.
    #[error("malformed verifier artifact: {0}")]
    MalformedArtifact(String),
}

/// An external zero-knowledge verifier bound to the four variant keys.
///
/// Implementations must be deterministic for a given (proof, variant) pair
/// and must keep concurrent verifications isolated — one submission's proof
/// bytes may never leak into another's check through shared scratch state.
pub trait ProofVerifier: Send + Sync {
    /// Verify `proof` against the verification key for `variant`.
    ///
    /// `Ok(true)` means the proof verified; `Ok(false)` means the verifier
    /// evaluated it and rejected it; `Err` means it could not be evaluated.
    fn verify(&self, proof: &[u8], variant: ProofVariant) -> Result<bool, VerifyError>;
}
