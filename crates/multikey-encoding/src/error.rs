//! Encoding errors

use thiserror::Error;

use crate::curve::Curve;

#[derive(Error, Debug)]
pub enum EncodingError {
    /// Wrong key length or unsupported curve on the encode side
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported multibase prefix: expected 'z' (base58btc), got '{0}'")]
    UnsupportedMultibase(char),

    #[error("Malformed base58 encoding: {0}")]
    MalformedEncoding(String),

    #[error("Malformed multicodec prefix: {0}")]
    MalformedPrefix(String),

    #[error("Unknown curve codec: 0x{0:x}")]
    UnknownCurve(u64),

    #[error("Invalid key length for {curve}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        curve: Curve,
        expected: usize,
        actual: usize,
    },
}
