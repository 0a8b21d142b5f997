use tracing::debug;

use crate::error::CrackError;
use crate::single_byte::{self, SingleByteKey};

/// A candidate ciphertext together with its best single-byte key.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Position of the candidate in the input slice.
    pub index: usize,
    pub key: SingleByteKey,
}

/// Find which of `candidates` was encrypted with single-byte XOR.
///
/// Every non-empty candidate is cracked; the result holds one [`Detection`]
/// per candidate, most English-looking first (ties by index). Empty
/// candidates are skipped.
pub fn detect_single_byte<T: AsRef<[u8]>>(candidates: &[T]) -> Result<Vec<Detection>, CrackError> {
    let mut hits = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let bytes = candidate.as_ref();
        if bytes.is_empty() {
            continue;
        }
        let key = single_byte::crack(bytes)?;
        hits.push(Detection { index, key });
    }

    if hits.is_empty() {
        return Err(CrackError::EmptyInput);
    }

    hits.sort_by(|a, b| {
        b.key
            .score
            .total_cmp(&a.key.score)
            .then(a.index.cmp(&b.index))
    });

    if let Some(top) = hits.first() {
        debug!(index = top.index, key = top.key.key, score = top.key.score, "best single-byte candidate");
    }

    Ok(hits)
}
