//! Error types for key generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] multikey_encoding::EncodingError),
}

pub type Result<T> = std::result::Result<T, KeygenError>;
