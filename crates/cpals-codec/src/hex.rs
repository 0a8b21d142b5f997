//! Hex text <-> bytes.

use ::hex::FromHexError;

use crate::error::HexError;

/// Decode a hex string into bytes.
///
/// Each consecutive pair of characters becomes one byte, in order. Both
/// cases are accepted. No `0x` prefix, no whitespace.
///
/// Length is checked first: an odd-length input fails with
/// [`HexError::InvalidInput`] even if it also contains non-hex characters.
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    if text.len() % 2 != 0 {
        return Err(HexError::InvalidInput { len: text.len() });
    }

    ::hex::decode(text).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => {
            // The hex crate reports the raw byte; the first invalid byte of a
            // multi-byte char is its lead byte, so `index` is a char boundary.
            let ch = text.get(index..).and_then(|s| s.chars().next()).unwrap_or(c);
            HexError::ParseError { ch, index }
        }
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            HexError::InvalidInput { len: text.len() }
        }
    })
}

/// Encode bytes as lowercase hex, two digits per byte.
pub fn encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
