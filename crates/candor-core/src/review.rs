//! # Review Records and Field Normalization
//!
//! [`ReviewSubmission`] is the raw field map the transport adapter hands to
//! the pipeline: thirteen string fields, missing keys defaulting to empty.
//! [`Review`] is the persisted, publicly readable record produced from an
//! accepted submission — created exactly once, never mutated, never deleted.
//!
//! Rating and recommend are normalized, not validated: an unparseable
//! rating falls back to `1.0` and anything but the literal `"true"`/`"True"`
//! maps to `false`. Normalization never rejects a submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{NullifierKey, PubKeyCoord, Scope};

/// Unique identifier for a persisted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(Uuid);

impl ReviewId {
    /// Create a new random review identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The raw submission field map delivered by the transport adapter.
///
/// Every field is a string and every field defaults to empty — a missing
/// key never aborts field extraction by itself; only the pipeline checks
/// can reject. Field names match the wire protocol verbatim, including the
/// mixed-case key coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub recommend: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub professor_name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub proof: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default, rename = "public_keyX")]
    pub public_key_x: String,
    #[serde(default, rename = "public_keyY")]
    pub public_key_y: String,
}

impl ReviewSubmission {
    /// The course scope this submission targets.
    pub fn scope(&self) -> Scope {
        Scope::new(
            self.college.as_str(),
            self.department.as_str(),
            self.class_name.as_str(),
        )
    }

    /// The nullifier tuple this submission would consume, with key
    /// coordinates in canonical form.
    pub fn nullifier_key(&self) -> NullifierKey {
        NullifierKey::new(
            self.scope(),
            PubKeyCoord::new(&self.public_key_x),
            PubKeyCoord::new(&self.public_key_y),
        )
    }
}

/// A persisted, publicly readable course review.
///
/// Grade and major hold either a disclosed value or the wire sentinel
/// `NOT_USED` — never the empty string. Key coordinates are stored in
/// canonical hex form. The proof and signature are kept hex-encoded for
/// audit; they are never re-verified after acceptance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub text: String,
    pub rating: f64,
    pub recommend: bool,
    pub grade: String,
    pub professor_name: String,
    pub class_name: String,
    pub major: String,
    pub college: String,
    pub department: String,
    pub proof: String,
    pub signature: String,
    #[serde(rename = "public_keyX")]
    pub public_key_x: String,
    #[serde(rename = "public_keyY")]
    pub public_key_y: String,
    pub created_at: DateTime<Utc>,
}

/// Parse a rating string, falling back to `1.0`.
///
/// The fallback is deliberate protocol behavior, not sloppiness: a review
/// with a garbled rating is still accepted, it just lands on the floor
/// value. Non-finite parses (`"inf"`, `"NaN"`) violate the finite-number
/// invariant and take the same fallback.
pub fn normalize_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 1.0,
    }
}

/// Strict boolean coercion: the literal `"true"` or `"True"` and nothing
/// else. `"yes"`, `"TRUE"`, `"1"` all map to `false`.
pub fn normalize_recommend(raw: &str) -> bool {
    matches!(raw, "true" | "True")
}
