//! Multibase encoding/decoding utilities
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used; only base58btc
//! (prefix `z`) is supported here.
//!
//! See: <https://github.com/multiformats/multibase>

use crate::EncodingError;

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the decoded bytes without the prefix.
pub fn decode_base58btc(s: &str) -> Result<Vec<u8>, EncodingError> {
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        let prefix = s.chars().next().unwrap_or('\0');
        return Err(EncodingError::UnsupportedMultibase(prefix));
    };

    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| EncodingError::MalformedEncoding(e.to_string()))
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    format!("{BASE58BTC_PREFIX}{}", bs58::encode(bytes).into_string())
}

/// Validate that a string is base58btc multibase (starts with 'z' and decodes)
pub fn validate_base58btc(s: &str) -> Result<(), EncodingError> {
    decode_base58btc(s)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base58btc() {
        // "z" + base58btc("hello") = "zCn8eVZg"
        let result = decode_base58btc("zCn8eVZg").unwrap();
        assert_eq!(result, b"hello");
    }

    #[test]
    fn test_encode_base58btc() {
        let encoded = encode_base58btc(b"hello");
        assert_eq!(encoded, "zCn8eVZg");
    }

    #[test]
    fn test_roundtrip() {
        let original = b"test data for encoding";
        let encoded = encode_base58btc(original);
        let decoded = decode_base58btc(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_leading_zero_bytes() {
        // each leading zero byte maps to one leading '1' character
        let encoded = encode_base58btc(&[0, 0, 1]);
        assert_eq!(encoded, "z112");
        assert_eq!(decode_base58btc(&encoded).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_unsupported_prefix() {
        let result = decode_base58btc("fABCDEF"); // 'f' is hex, not base58btc
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::UnsupportedMultibase('f')
        ));
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(
            decode_base58btc("").unwrap_err(),
            EncodingError::UnsupportedMultibase('\0')
        ));
    }

    #[test]
    fn test_invalid_base58() {
        // '0', 'O', 'I', 'l' are not valid base58 characters
        let result = decode_base58btc("z0OIl");
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::MalformedEncoding(_)
        ));
    }
}
