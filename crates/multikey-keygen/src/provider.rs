//! Key generation provider seam

use multikey_encoding::Curve;

use crate::error::Result;
use crate::keypair::KeyPair;

/// Produces keypairs for a named curve
///
/// The encoding layer consumes only the curve and compressed public
/// bytes of the result, so tests can substitute a provider returning
/// fixed vectors.
pub trait KeyProvider {
    fn generate_keypair(&self, curve: Curve) -> Result<KeyPair>;
}

/// Provider backed by the operating system RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngProvider;

impl KeyProvider for OsRngProvider {
    fn generate_keypair(&self, curve: Curve) -> Result<KeyPair> {
        match curve {
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::generate(None),
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::generate(None),
            #[allow(unreachable_patterns)]
            other => Err(crate::KeygenError::UnsupportedCurve(other.to_string())),
        }
    }
}
