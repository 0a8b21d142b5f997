//! Hex <-> base64 shortcuts.

use crate::error::{Base64Error, HexError};
use crate::{base64, hex};

/// Decode `hex_text` and re-encode the bytes as base64.
pub fn hex_to_base64(hex_text: &str) -> Result<String, HexError> {
    let bytes = hex::decode(hex_text)?;
    Ok(base64::encode_string(&bytes))
}

/// Decode base64 `text` and re-encode the bytes as lowercase hex.
pub fn base64_to_hex(text: &str) -> Result<String, Base64Error> {
    let bytes = base64::decode(text)?;
    Ok(hex::encode(&bytes))
}
