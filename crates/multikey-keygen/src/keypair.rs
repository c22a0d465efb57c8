//! Generated key material

use multikey_encoding::{Curve, encode_multikey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Generated key pair with raw byte representations
///
/// Secret material is zeroized on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    pub curve: Curve,
    /// Big-endian secret scalar
    pub secret_bytes: Vec<u8>,
    /// SEC1 uncompressed point (0x04 || x || y)
    pub public_bytes: Vec<u8>,
    /// SEC1 compressed point (0x02/0x03 || x)
    pub public_bytes_compressed: Vec<u8>,
}

impl KeyPair {
    /// Multikey (multibase base58btc) string for the compressed public key
    pub fn public_multikey(&self) -> Result<String> {
        Ok(encode_multikey(self.curve, &self.public_bytes_compressed)?)
    }
}
