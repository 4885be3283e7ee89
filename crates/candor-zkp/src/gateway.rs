//! # Proof Gateway
//!
//! The pipeline-facing face of proof verification. Pre-validates the
//! hex-encoded proof before the backend is ever invoked, and collapses
//! every backend fault to a failed check: malformed proof, missing binary,
//! and honest rejection are all the same `false` to the caller. The
//! distinction survives only in the logs.

use std::sync::Arc;

use crate::traits::ProofVerifier;
use crate::variant::ProofVariant;

/// Wraps a [`ProofVerifier`] with wire-format validation and error collapse.
#[derive(Clone)]
pub struct ProofGateway {
    backend: Arc<dyn ProofVerifier>,
}

impl ProofGateway {
    pub fn new(backend: Arc<dyn ProofVerifier>) -> Self {
        Self { backend }
    }

    /// Check a hex-encoded proof against the key for `variant`.
    ///
    /// An empty or non-hex proof fails immediately, without invoking the
    /// backend. Backend faults are logged and reported as failure.
    pub fn check(&self, proof_hex: &str, variant: ProofVariant) -> bool {
        let trimmed = proof_hex.trim();
        if trimmed.is_empty() {
            return false;
        }
        let stripped = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let proof = match hex::decode(stripped) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(%variant, error = %e, "proof is not valid hex");
                return false;
            }
        };

        match self.backend.verify(&proof, variant) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::warn!(%variant, error = %e, "proof verifier fault, rejecting submission");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::VerifyError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that counts invocations and returns a fixed verdict.
    struct Counting {
        calls: AtomicUsize,
        verdict: Result<bool, ()>,
    }

    impl ProofVerifier for Counting {
        fn verify(&self, _proof: &[u8], _variant: ProofVariant) -> Result<bool, VerifyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.verdict
                .map_err(|_| VerifyError::Unavailable("down".to_string()))
        }
    }

    fn gateway(verdict: Result<bool, ()>) -> (ProofGateway, Arc<Counting>) {
        let backend = Arc::new(Counting {
            calls: AtomicUsize::new(0),
            verdict,
        });
        (ProofGateway::new(backend.clone()), backend)
    }

    #[test]
    fn empty_proof_fails_without_backend_call() {
        let (gw, backend) = gateway(Ok(true));
        assert!(!gw.check("", ProofVariant::EnrollmentOnly));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_hex_proof_fails_without_backend_call() {
        let (gw, backend) = gateway(Ok(true));
        assert!(!gw.check("zzzz", ProofVariant::EnrollmentOnly));
        assert!(!gw.check("abc", ProofVariant::EnrollmentOnly)); // odd length
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_hex_reaches_backend() {
        let (gw, backend) = gateway(Ok(true));
        assert!(gw.check("deadbeef", ProofVariant::GradeAndMajor));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn prefixed_hex_is_accepted() {
        let (gw, backend) = gateway(Ok(true));
        assert!(gw.check("0xdeadbeef", ProofVariant::GradeAndMajor));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backend_rejection_is_false() {
        let (gw, _) = gateway(Ok(false));
        assert!(!gw.check("deadbeef", ProofVariant::MajorOnly));
    }

    #[test]
    fn backend_fault_is_false_not_panic() {
        let (gw, _) = gateway(Err(()));
        assert!(!gw.check("deadbeef", ProofVariant::GradeOnly));
    }
}
