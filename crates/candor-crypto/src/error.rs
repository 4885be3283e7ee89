//! # Cryptographic Error Types
//!
//! Structured errors for signature verification. The submitter never sees
//! these — every kind collapses to a single "invalid signature" rejection —
//! but operators get the distinguishing detail in the logs.

use thiserror::Error;

/// Errors from signature verification in the Candor stack.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// A hex field (coordinate or signature) could not be decoded.
    #[error("hex decode error: {0}")]
    HexDecode(String),

    /// The coordinates do not assemble into a valid point on P-256.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The signature bytes are neither valid DER nor a 64-byte fixed form.
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Well-formed inputs, but the signature does not match the message.
    #[error("signature does not match message")]
    VerificationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decode_display() {
        let err = CryptoError::HexDecode("odd length".to_string());
        assert!(format!("{err}").contains("odd length"));
    }

    #[test]
    fn invalid_public_key_display() {
        let err = CryptoError::InvalidPublicKey("point not on curve".to_string());
        assert!(format!("{err}").contains("not on curve"));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<CryptoError> = vec![
            CryptoError::HexDecode("a".to_string()),
            CryptoError::InvalidPublicKey("b".to_string()),
            CryptoError::InvalidSignatureEncoding("c".to_string()),
            CryptoError::VerificationFailed,
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
