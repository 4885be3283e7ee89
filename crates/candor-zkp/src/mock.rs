//! # Mock Verifier
//!
//! A deterministic test double for the external verifier. Carries an
//! explicit accept-list of (proof, variant) pairs plus a default verdict,
//! and counts invocations so tests can assert that a short-circuited check
//! never reached the backend. Provides no cryptographic guarantees of any
//! kind.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::traits::{ProofVerifier, VerifyError};
use crate::variant::ProofVariant;

/// Deterministic [`ProofVerifier`] for tests.
pub struct MockVerifier {
    accepted: HashSet<(Vec<u8>, ProofVariant)>,
    default_verdict: bool,
    fault: Option<String>,
    calls: AtomicUsize,
}

impl MockVerifier {
    /// A verifier that accepts everything.
    pub fn accepting() -> Self {
        Self {
            accepted: HashSet::new(),
            default_verdict: true,
            fault: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A verifier that rejects everything.
    pub fn rejecting() -> Self {
        Self {
            default_verdict: false,
            ..Self::accepting()
        }
    }

    /// A verifier that fails with `Unavailable` on every call.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            fault: Some(reason.into()),
            ..Self::accepting()
        }
    }

    /// Reject by default, but accept this exact (proof, variant) pair.
    /// Chainable; used to pin a test proof to its intended variant.
    pub fn accept(mut self, proof: &[u8], variant: ProofVariant) -> Self {
        self.accepted.insert((proof.to_vec(), variant));
        self.default_verdict = false;
        self
    }

    /// Number of times `verify` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProofVerifier for MockVerifier {
    fn verify(&self, proof: &[u8], variant: ProofVariant) -> Result<bool, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.fault {
            return Err(VerifyError::Unavailable(reason.clone()));
        }
        if self.accepted.contains(&(proof.to_vec(), variant)) {
            return Ok(true);
        }
        Ok(self.default_verdict)
    }
}
