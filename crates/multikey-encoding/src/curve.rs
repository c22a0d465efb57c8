//! Supported curve enumeration
//!
//! Each curve carries two fixed attributes: its public-key multicodec
//! code and the byte length of its SEC1 compressed point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EncodingError;
use crate::multicodec::{P256_PUB, SECP256K1_PUB};

/// Curves with an assigned compressed public-key multicodec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    P256,
    Secp256k1,
}

impl Curve {
    /// Multicodec code for this curve's compressed public key
    pub fn code(&self) -> u64 {
        match self {
            Curve::P256 => P256_PUB,
            Curve::Secp256k1 => SECP256K1_PUB,
        }
    }

    /// Byte length of the SEC1 compressed point
    pub fn key_length(&self) -> usize {
        match self {
            Curve::P256 | Curve::Secp256k1 => 33,
        }
    }

    /// Look up the curve for a raw multicodec code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            P256_PUB => Some(Curve::P256),
            SECP256K1_PUB => Some(Curve::Secp256k1),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Curve {
    type Error = EncodingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "P-256" => Ok(Curve::P256),
            "secp256k1" => Ok(Curve::Secp256k1),
            _ => Err(EncodingError::InvalidInput(format!(
                "unsupported curve: {value}"
            ))),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Curve::P256 => write!(f, "P-256"),
            Curve::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}
