//! # Optional Attribute Disclosure
//!
//! Grade and major are optional: a reviewer may prove enrollment alone, or
//! additionally disclose one or both attributes. The transport encodes
//! "withheld" as the literal string `NOT_USED`. That sentinel stops here —
//! inside the pipeline a withheld attribute is a plain `None`, and the
//! sentinel is re-emitted only when writing the wire-form record.

use serde::{Deserialize, Serialize};

/// Wire sentinel for a withheld optional attribute.
pub const WITHHELD: &str = "NOT_USED";

/// An optional reviewer attribute (grade or major).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure(Option<String>);

impl Disclosure {
    /// Translate a transport value. The sentinel and the empty string both
    /// mean "withheld"; anything else is a disclosed value.
    pub fn from_wire(raw: &str) -> Self {
        if raw == WITHHELD || raw.is_empty() {
            Self(None)
        } else {
            Self(Some(raw.to_string()))
        }
    }

    pub fn disclosed(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn withheld() -> Self {
        Self(None)
    }

    pub fn is_withheld(&self) -> bool {
        self.0.is_none()
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Re-encode for the wire: a withheld attribute becomes the sentinel,
    /// never the empty string, so stored rows always carry a real value.
    pub fn to_wire(&self) -> String {
        match &self.0 {
            Some(v) => v.clone(),
            None => WITHHELD.to_string(),
        }
    }
}
