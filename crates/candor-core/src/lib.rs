//! # candor-core — Foundational Types for the Candor Review Stack
//!
//! Candor lets members of an institution publish course reviews anonymously
//! while proving enrollment (and optionally grade and/or major) with a
//! zero-knowledge proof, and binding the review text to a key pair with an
//! ECDSA signature. This crate holds the domain vocabulary shared by the
//! verification pipeline:
//!
//! - [`Scope`] — the (college, department, course) triple a review is bound to.
//! - [`PubKeyCoord`] — a P-256 coordinate in canonical hex form. One
//!   canonicalization, applied before both nullifier comparison and
//!   public-key parsing, so the two call sites can never disagree.
//! - [`NullifierKey`] — the one-time-use (scope, pk_x, pk_y) tuple that
//!   bounds each key pair to a single accepted review per course scope.
//! - [`Disclosure`] — optional grade/major attributes. The wire encodes
//!   "withheld" as the literal sentinel `NOT_USED`; internally it is an
//!   honest `Option` and the sentinel exists only at the boundary.
//! - [`Review`] / [`ReviewSubmission`] — the persisted record and the raw
//!   transport field map it is built from.
//! - [`SubmissionError`] — the closed rejection taxonomy of the pipeline.

pub mod disclosure;
pub mod error;
pub mod review;
pub mod types;

pub use disclosure::{Disclosure, WITHHELD};
pub use error::SubmissionError;
pub use review::{normalize_rating, normalize_recommend, Review, ReviewId, ReviewSubmission};
pub use types::{NullifierKey, PubKeyCoord, Scope};
