//! # ECDSA P-256 Verification
//!
//! Assembles an uncompressed SEC1 point (`0x04 || X || Y`) from canonical
//! hex coordinates, parses the signature (DER first, then the 64-byte
//! fixed form), and verifies over the UTF-8 message bytes with SHA-256.
//!
//! Malformed hex, an off-curve point, and a non-matching signature are all
//! the same answer to the caller: the signature does not verify. None of
//! them propagates as a fault.

use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::EncodedPoint;

use candor_core::PubKeyCoord;

use crate::error::CryptoError;

/// Decode a canonical coordinate into its 32 big-endian bytes.
fn decode_coord(coord: &PubKeyCoord) -> Result<[u8; 32], CryptoError> {
    if !coord.is_canonical() {
        return Err(CryptoError::InvalidPublicKey(format!(
            "coordinate is not canonical hex: {:?}",
            coord.as_str()
        )));
    }
    let bytes = hex::decode(coord.as_str())
        .map_err(|e| CryptoError::HexDecode(e.to_string()))?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Parse the claimed public key from its coordinates.
///
/// Rejects coordinates that do not lie on the P-256 curve.
fn parse_public_key(pk_x: &PubKeyCoord, pk_y: &PubKeyCoord) -> Result<VerifyingKey, CryptoError> {
    let x = decode_coord(pk_x)?;
    let y = decode_coord(pk_y)?;

    let mut sec1 = [0u8; 65];
    sec1[0] = 0x04;
    sec1[1..33].copy_from_slice(&x);
    sec1[33..].copy_from_slice(&y);

    let point = EncodedPoint::from_bytes(sec1)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
    VerifyingKey::from_encoded_point(&point)
        .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
}

/// Parse a hex signature as DER, falling back to the 64-byte fixed form.
fn parse_signature(signature_hex: &str) -> Result<Signature, CryptoError> {
    let trimmed = signature_hex.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(stripped).map_err(|e| CryptoError::HexDecode(e.to_string()))?;

    Signature::from_der(&bytes)
        .or_else(|_| Signature::from_slice(&bytes))
        .map_err(|e| CryptoError::InvalidSignatureEncoding(e.to_string()))
}

/// Verify that `message` was signed by the holder of (`pk_x`, `pk_y`).
///
/// ECDSA over NIST P-256 with SHA-256 of the UTF-8 message bytes.
pub fn verify_signature(
    signature_hex: &str,
    pk_x: &PubKeyCoord,
    pk_y: &PubKeyCoord,
    message: &str,
) -> Result<(), CryptoError> {
    let key = parse_public_key(pk_x, pk_y)?;
    let signature = parse_signature(signature_hex)?;
    key.verify(message.as_bytes(), &signature)
        .map_err(|_| CryptoError::VerificationFailed)
}

/// Boolean facade for the pipeline: every failure kind is `false`.
///
/// The distinguishing kind is logged at debug level for diagnostics but is
/// not exposed to the submitter.
pub fn check_signature(
    signature_hex: &str,
    pk_x: &PubKeyCoord,
    pk_y: &PubKeyCoord,
    message: &str,
) -> bool {
    match verify_signature(signature_hex, pk_x, pk_y, message) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "signature check failed");
            false
        }
    }
}
