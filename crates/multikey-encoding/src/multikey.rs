//! Multikey encoding/decoding
//!
//! A multikey is a SEC1 compressed public key prefixed with its curve's
//! multicodec value and wrapped as a multibase (base58btc) string. This
//! is the representation used for `publicKeyMultibase` values and
//! `did:key` identifiers.

use crate::EncodingError;
use crate::curve::Curve;
use crate::multibase::{decode_base58btc, encode_base58btc};
use crate::multicodec::{encode_prefixed, split_prefixed};

/// Encode a compressed public key as a multikey string
///
/// `key` must be exactly `curve.key_length()` bytes; it is never padded
/// or truncated.
pub fn encode_multikey(curve: Curve, key: &[u8]) -> Result<String, EncodingError> {
    let expected = curve.key_length();
    if key.len() != expected {
        return Err(EncodingError::InvalidInput(format!(
            "{curve} compressed public keys are {expected} bytes, got {}",
            key.len()
        )));
    }

    Ok(encode_base58btc(&encode_prefixed(curve.code(), key)))
}

/// Decode a multikey string back into the curve and compressed key bytes
///
/// Note: the returned bytes are not checked for curve membership; point
/// validation is a separate cryptographic step.
pub fn decode_multikey(s: &str) -> Result<(Curve, Vec<u8>), EncodingError> {
    let bytes = decode_base58btc(s)?;
    let (code, key) = split_prefixed(&bytes)?;

    let Some(curve) = Curve::from_code(code) else {
        return Err(EncodingError::UnknownCurve(code));
    };

    let expected = curve.key_length();
    if key.len() != expected {
        return Err(EncodingError::InvalidKeyLength {
            curve,
            expected,
            actual: key.len(),
        });
    }

    Ok((curve, key.to_vec()))
}
