//! # Scope and Nullifier Newtypes
//!
//! Domain-primitive newtypes for the anti-replay machinery. A review is
//! bound to a [`Scope`]; the submitter's key pair is bound to that scope
//! through a [`NullifierKey`]. Equality on the nullifier tuple is exact
//! string equality over canonical forms — the canonicalization happens
//! once, in [`PubKeyCoord::new`], and nowhere else.

use serde::{Deserialize, Serialize};

/// The (college, department, course) triple a review and its nullifier are
/// bound to. Scope strings are compared verbatim — `"CS"` and `"cs"` are
/// different departments as far as the registry is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub college: String,
    pub department: String,
    /// Course identifier, e.g. `"CS-2110"`. Named `class_name` on the wire.
    pub course: String,
}

impl Scope {
    pub fn new(
        college: impl Into<String>,
        department: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            college: college.into(),
            department: department.into(),
            course: course.into(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.college, self.department, self.course)
    }
}

/// A P-256 coordinate in canonical hex form.
///
/// Canonical form: lowercase, no `0x` prefix, left-zero-padded to exactly
/// 64 hex digits. Both the nullifier registry and the signature verifier
/// consume this type, so a key submitted as `0xAB..` and later as `ab..`
/// lands on the same nullifier tuple and parses to the same curve point.
///
/// Construction is total. Input that is not valid hex (or longer than 64
/// digits) is carried verbatim, lowercased — such a coordinate can never
/// decode to a curve point, so the submission carrying it dies at the
/// signature check rather than aborting field extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PubKeyCoord(String);

impl Serialize for PubKeyCoord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Deserialization routes through [`PubKeyCoord::new`] so a coordinate
/// read from the wire is canonicalized exactly like one built in process.
impl<'de> Deserialize<'de> for PubKeyCoord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

impl PubKeyCoord {
    /// Canonicalize a raw coordinate string from the transport layer.
    pub fn new(raw: &str) -> Self {
        let stripped = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);
        let lowered = stripped.to_ascii_lowercase();

        let is_canonical_hex =
            !lowered.is_empty() && lowered.len() <= 64 && lowered.bytes().all(|b| b.is_ascii_hexdigit());
        if is_canonical_hex {
            Self(format!("{lowered:0>64}"))
        } else {
            Self(lowered)
        }
    }

    /// The canonical hex string (or the lowercased verbatim input when the
    /// raw value could not be canonicalized).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this coordinate is in canonical 64-digit form and can be
    /// decoded to 32 big-endian bytes.
    pub fn is_canonical(&self) -> bool {
        self.0.len() == 64 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl std::fmt::Display for PubKeyCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The one-time-use token tuple: (scope, pk_x, pk_y).
///
/// At most one accepted review may exist per key across all time. The
/// tuple is recorded atomically with its review; it is never deleted, and
/// no identity is stored — the key coordinates alone bound ballot-stuffing
/// without de-anonymizing the reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NullifierKey {
    pub scope: Scope,
    pub pk_x: PubKeyCoord,
    pub pk_y: PubKeyCoord,
}

impl NullifierKey {
    pub fn new(scope: Scope, pk_x: PubKeyCoord, pk_y: PubKeyCoord) -> Self {
        Self { scope, pk_x, pk_y }
    }
}
