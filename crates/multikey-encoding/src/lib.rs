//! Multibase and multicodec encoding for compressed elliptic-curve public keys
//!
//! When a public key is represented as a string, the preferred form is a
//! multikey: the SEC1 compressed point, prefixed with the curve's
//! varint-encoded multicodec value, encoded as base58btc and wrapped with
//! the multibase identifier `z`. Embedding the key type in the encoding
//! lets the string be parsed unambiguously.
//!
//! This crate provides:
//! - The [`Curve`] table (multicodec code + compressed key length per curve)
//! - Multibase (base58btc) encoding/decoding
//! - Multicodec varint prefix handling
//! - The [`encode_multikey`]/[`decode_multikey`] operations

pub mod curve;
pub mod multibase;
pub mod multicodec;
pub mod multikey;

mod error;

pub use curve::Curve;
pub use error::EncodingError;
pub use multibase::{
    BASE58BTC_PREFIX, decode_base58btc, encode_base58btc, validate_base58btc,
};
pub use multicodec::{P256_PUB, SECP256K1_PUB};
pub use multikey::{decode_multikey, encode_multikey};
