//! Bytes <-> standard base64 (`A-Z a-z 0-9 + /`, `=` padded).

use ::base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::Base64Error;

/// Encode bytes as base64 text, returned as the ASCII bytes of that text.
///
/// Never fails; empty input yields empty output.
pub fn encode(bytes: &[u8]) -> Vec<u8> {
    encode_string(bytes).into_bytes()
}

/// Same as [`encode`], as a `String`.
pub fn encode_string(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64.
pub fn decode(text: &str) -> Result<Vec<u8>, Base64Error> {
    Ok(STANDARD.decode(text)?)
}

/// Decode base64 that has been wrapped across lines.
///
/// Each line is trimmed before joining, so CRLF files and trailing
/// whitespace are fine. Blank lines contribute nothing.
pub fn decode_lines(text: &str) -> Result<Vec<u8>, Base64Error> {
    let joined: String = text.lines().map(str::trim).collect();
    decode(&joined)
}
