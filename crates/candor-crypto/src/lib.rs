//! # candor-crypto — Signature Verification for the Candor Review Stack
//!
//! One job: decide whether a review's text was signed by the holder of the
//! claimed P-256 key pair. The public key arrives as two hex coordinates
//! (already canonicalized by `candor-core`), the signature as hex-encoded
//! DER or fixed-width bytes, and the message as the UTF-8 review text.
//! Verification is ECDSA over NIST P-256 with SHA-256.
//!
//! This check binds the review *content* to the key pair. It is independent
//! of, and never substitutes for, the zero-knowledge eligibility proof.

pub mod ecdsa;
pub mod error;

pub use ecdsa::{check_signature, verify_signature};
pub use error::CryptoError;
