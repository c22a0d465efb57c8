//! Elliptic-curve keypair generation for multikey encoding
//!
//! This crate provides:
//! - Keypair generation for P-256 and secp256k1, exposing the secret
//!   scalar plus uncompressed and compressed public points
//! - The [`KeyProvider`] seam, so callers of the encoding layer can
//!   substitute a fixed-vector provider in tests
//! - Point validation for raw public-key bytes, kept out of the
//!   encoding layer by design

mod error;
mod keypair;
mod provider;

#[cfg(feature = "p256")]
pub mod p256;

#[cfg(feature = "k256")]
pub mod secp256k1;

pub use error::{KeygenError, Result};
pub use keypair::KeyPair;
pub use provider::{KeyProvider, OsRngProvider};

use multikey_encoding::Curve;

/// Checks that raw public-key bytes decode to a point on the given curve
///
/// Accepts both compressed and uncompressed SEC1 encodings.
pub fn validate_public_key(curve: Curve, data: &[u8]) -> Result<()> {
    match curve {
        #[cfg(feature = "p256")]
        Curve::P256 => p256::validate_public_key(data),
        #[cfg(feature = "k256")]
        Curve::Secp256k1 => secp256k1::validate_public_key(data),
        #[allow(unreachable_patterns)]
        other => Err(KeygenError::UnsupportedCurve(other.to_string())),
    }
}
