//! secp256k1 key operations

use k256::{
    AffinePoint, EncodedPoint,
    ecdsa::{SigningKey, VerifyingKey},
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
};
use rand::rngs::OsRng;

use multikey_encoding::Curve;

use crate::{KeyPair, KeygenError, error::Result};

/// Generates a secp256k1 key pair
///
/// Uses the given secret scalar bytes, or a fresh OS-RNG key when `None`.
pub fn generate(secret: Option<&[u8]>) -> Result<KeyPair> {
    let signing_key = match secret {
        Some(secret) => SigningKey::from_slice(secret).map_err(|e| {
            KeygenError::KeyError(format!("secp256k1 secret material isn't valid: {e}"))
        })?,
        None => SigningKey::random(&mut OsRng),
    };

    let verifying_key = VerifyingKey::from(&signing_key);

    Ok(KeyPair {
        curve: Curve::Secp256k1,
        secret_bytes: signing_key.to_bytes().to_vec(),
        public_bytes: verifying_key.to_encoded_point(false).as_bytes().to_vec(),
        public_bytes_compressed: verifying_key.to_encoded_point(true).as_bytes().to_vec(),
    })
}

/// Checks that raw secp256k1 public-key bytes (compressed or uncompressed)
/// decode to a point on the curve
pub fn validate_public_key(data: &[u8]) -> Result<()> {
    let ep = EncodedPoint::from_bytes(data)
        .map_err(|e| KeygenError::KeyError(format!("secp256k1 public key isn't valid: {e}")))?;

    AffinePoint::from_encoded_point(&ep)
        .into_option()
        .ok_or_else(|| KeygenError::KeyError("secp256k1 point is not on the curve".into()))?;

    Ok(())
}
