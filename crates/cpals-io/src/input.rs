//! Parsing the line-oriented inputs the attacks consume.

use cpals_codec::{Base64Error, HexError, base64, hex};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("line {line}: {source}")]
    Hex {
        line: usize,
        #[source]
        source: HexError,
    },

    #[error(transparent)]
    Base64(#[from] Base64Error),
}

/// One decoded line of a hex-per-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub bytes: Vec<u8>,
}

/// Decode text holding one hex string per line.
///
/// Lines are trimmed; blank lines are skipped but still counted, so `line`
/// always points back into the source. Fails on the first bad line.
pub fn read_hex_lines(text: &str) -> Result<Vec<HexLine>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let line = i + 1;
            hex::decode(l.trim())
                .map(|bytes| HexLine { line, bytes })
                .map_err(|source| InputError::Hex { line, source })
        })
        .collect()
}

/// Decode base64 text that may be wrapped across lines.
pub fn read_base64_lines(text: &str) -> Result<Vec<u8>, InputError> {
    Ok(base64::decode_lines(text)?)
}
