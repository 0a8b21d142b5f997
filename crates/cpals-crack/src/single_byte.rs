use cpals_freq::score;
use cpals_xor::single::xor_byte;
use tracing::trace;

use crate::error::CrackError;

/// Best single-byte key found for a ciphertext.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleByteKey {
    pub key: u8,
    /// [`cpals_freq::score`] of `plaintext`.
    pub score: f64,
    pub plaintext: Vec<u8>,
}

/// Recover the key of a single-byte XOR cipher by trying all 256 keys and
/// keeping the most English-looking plaintext.
///
/// Ties keep the smaller key.
pub fn crack(ciphertext: &[u8]) -> Result<SingleByteKey, CrackError> {
    if ciphertext.is_empty() {
        return Err(CrackError::EmptyInput);
    }

    let mut best: Option<SingleByteKey> = None;
    for key in 0..=u8::MAX {
        let plaintext = xor_byte(ciphertext, key);
        let score = score(&plaintext);
        trace!(key, score, "single-byte candidate");

        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(SingleByteKey {
                key,
                score,
                plaintext,
            });
        }
    }

    best.ok_or(CrackError::EmptyInput)
}
