//! # Proof Variant Selection
//!
//! Four circuits, four verification keys, one per disclosure combination.
//! Selection is a pure, total function of which optional attributes the
//! submission disclosed — grade condition first, major second. Supplying a
//! proof generated for a different combination than the fields claim is
//! caught by that variant's verification key rejecting the proof, not by
//! the selector.

use candor_core::Disclosure;
use serde::{Deserialize, Serialize};

/// The four fixed verification configurations.
///
/// Discriminants are the wire-level variant indices and must not be
/// reordered: each index is bound to an external circuit and key artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProofVariant {
    /// Grade withheld, major withheld — prove enrollment only.
    EnrollmentOnly = 0,
    /// Grade withheld, major disclosed.
    MajorOnly = 1,
    /// Grade disclosed, major withheld.
    GradeOnly = 2,
    /// Both disclosed.
    GradeAndMajor = 3,
}

impl ProofVariant {
    /// Select the variant for a (grade, major) disclosure pair.
    ///
    /// Every pair maps to exactly one variant; adding a fifth disclosure
    /// combination is a compile-error here, not a silent fallthrough.
    pub fn select(grade: &Disclosure, major: &Disclosure) -> Self {
        match (grade.is_withheld(), major.is_withheld()) {
            (true, true) => Self::EnrollmentOnly,
            (true, false) => Self::MajorOnly,
            (false, true) => Self::GradeOnly,
            (false, false) => Self::GradeAndMajor,
        }
    }

    /// Wire-level variant index.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// File name of this variant's verification key artifact.
    pub fn vk_filename(&self) -> &'static str {
        match self {
            Self::EnrollmentOnly => "vk_no_grade_no_major",
            Self::MajorOnly => "vk_no_grade_yes_major",
            Self::GradeOnly => "vk_yes_grade_no_major",
            Self::GradeAndMajor => "vk_yes_grade_yes_major",
        }
    }
}

impl std::fmt::Display for ProofVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "variant {}", self.index())
    }
}
