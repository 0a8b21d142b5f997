use thiserror::Error;

/// Hex decoding failures.
///
/// Length is checked before any character, so an odd-length input always
/// reports `InvalidInput`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Input has an odd byte length.
    #[error("malformed byte string: odd length {len}")]
    InvalidInput { len: usize },

    /// A character outside `[0-9a-fA-F]`. `index` is a byte offset into the input.
    #[error("invalid hex character {ch:?} at position {index}")]
    ParseError { ch: char, index: usize },
}

/// Base64 decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("invalid base64 text: {0}")]
    Invalid(#[from] ::base64::DecodeError),
}
