//! Multicodec varint prefix handling
//!
//! Multicodec is a self-describing format that prefixes data with a
//! varint indicating the type of data that follows.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************

/// p256-pub (compressed point), varint bytes [0x80, 0x24]
pub const P256_PUB: u64 = 0x1200;
/// secp256k1-pub (compressed point), varint bytes [0xe7, 0x01]
pub const SECP256K1_PUB: u64 = 0xe7;

/// Prepend the varint-encoded codec value to the data bytes
pub fn encode_prefixed(code: u64, data: &[u8]) -> Vec<u8> {
    let mut codec_buffer = [0u8; 10];
    let prefix = unsigned_varint::encode::u64(code, &mut codec_buffer);
    let mut result = Vec::with_capacity(prefix.len() + data.len());
    result.extend_from_slice(prefix);
    result.extend_from_slice(data);
    result
}

/// Split a multicodec-prefixed byte sequence into (codec value, data)
///
/// Fails on a truncated or over-length varint.
pub fn split_prefixed(bytes: &[u8]) -> Result<(u64, &[u8]), EncodingError> {
    unsigned_varint::decode::u64(bytes)
        .map_err(|e| EncodingError::MalformedPrefix(format!("varint decode: {e}")))
}
