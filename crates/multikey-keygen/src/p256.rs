//! P-256 (secp256r1/prime256v1) key operations

use p256::{
    AffinePoint, EncodedPoint,
    ecdsa::{SigningKey, VerifyingKey},
    elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint},
};
use rand::rngs::OsRng;

use multikey_encoding::Curve;

use crate::{KeyPair, KeygenError, error::Result};

/// Generates a P-256 key pair
///
/// Uses the given secret scalar bytes, or a fresh OS-RNG key when `None`.
pub fn generate(secret: Option<&[u8]>) -> Result<KeyPair> {
    let signing_key = match secret {
        Some(secret) => SigningKey::from_slice(secret).map_err(|e| {
            KeygenError::KeyError(format!("P-256 secret material isn't valid: {e}"))
        })?,
        None => SigningKey::random(&mut OsRng),
    };

    let verifying_key = VerifyingKey::from(&signing_key);

    Ok(KeyPair {
        curve: Curve::P256,
        secret_bytes: signing_key.to_bytes().to_vec(),
        public_bytes: verifying_key.to_encoded_point(false).as_bytes().to_vec(),
        public_bytes_compressed: verifying_key.to_encoded_point(true).as_bytes().to_vec(),
    })
}

/// Checks that raw P-256 public-key bytes (compressed or uncompressed)
/// decode to a point on the curve
pub fn validate_public_key(data: &[u8]) -> Result<()> {
    let ep = EncodedPoint::from_bytes(data)
        .map_err(|e| KeygenError::KeyError(format!("P-256 public key isn't valid: {e}")))?;

    AffinePoint::from_encoded_point(&ep)
        .into_option()
        .ok_or_else(|| KeygenError::KeyError("P-256 point is not on the curve".into()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_from_secret() {
        // secret scalar 1 yields the generator point
        let mut secret = [0u8; 32];
        secret[31] = 1;

        let keypair = generate(Some(&secret)).unwrap();
        assert_eq!(keypair.secret_bytes, secret);
        assert_eq!(
            hex::encode(&keypair.public_bytes_compressed),
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
        assert_eq!(keypair.public_bytes.len(), 65);
        assert_eq!(keypair.public_bytes[0], 0x04);
    }

    #[test]
    fn generate_random() {
        let keypair = generate(None).unwrap();
        assert_eq!(keypair.curve, Curve::P256);
        assert_eq!(keypair.secret_bytes.len(), 32);
        assert_eq!(keypair.public_bytes_compressed.len(), 33);
        assert!(matches!(keypair.public_bytes_compressed[0], 0x02 | 0x03));
    }

    #[test]
    fn validate_known_point() {
        let bytes: [u8; 33] = [
            3, 127, 35, 88, 48, 221, 61, 239, 167, 34, 239, 26, 162, 73, 214, 160, 221, 187, 164,
            249, 144, 176, 129, 117, 56, 147, 63, 87, 54, 64, 101, 53, 66,
        ];
        assert!(validate_public_key(&bytes).is_ok());
    }

    #[test]
    fn validate_rejects_off_curve_bytes() {
        // generator point with its y coordinate bumped by one
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let mut bytes = generate(Some(&secret)).unwrap().public_bytes.clone();
        bytes[64] = bytes[64].wrapping_add(1);

        assert!(matches!(
            validate_public_key(&bytes).unwrap_err(),
            KeygenError::KeyError(_)
        ));
    }
}
