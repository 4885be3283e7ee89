//! # candor-zkp — Proof Verification for the Candor Review Stack
//!
//! A submitted review carries an opaque proof asserting the reviewer's
//! enrollment, and optionally their grade and/or major. Four fixed circuits
//! exist — one per disclosure combination — each with its own verification
//! key. This crate owns:
//!
//! - [`ProofVariant`] — the closed four-way enum and the pure selector that
//!   maps (grade, major) disclosure to a variant.
//! - [`ProofVerifier`] — the capability trait the pipeline calls. The
//!   concrete mechanism (external binary, linked library, remote service)
//!   is an interchangeable implementation detail.
//! - [`ProofGateway`] — hex pre-validation and error collapse: every
//!   inability to evaluate a proof is a failed check, never a fault that
//!   crosses the pipeline boundary.
//! - [`UltraHonkVerifier`] — the production backend, shelling out to the
//!   Barretenberg `bb` binary with per-call scratch isolation.
//! - [`MockVerifier`] — a deterministic test double.

pub mod gateway;
pub mod mock;
pub mod traits;
pub mod variant;

#[cfg(feature = "ultra-honk")]
pub mod honk;

pub use gateway::ProofGateway;
pub use mock::MockVerifier;
pub use traits::{ProofVerifier, VerifyError};
pub use variant::ProofVariant;

#[cfg(feature = "ultra-honk")]
pub use honk::UltraHonkVerifier;
