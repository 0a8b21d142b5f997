//! Breaking repeating-key XOR.
//!
//! 1. Rank key sizes by the normalised Hamming distance between consecutive
//!    ciphertext blocks; the right size (and its multiples) pairs bytes
//!    encrypted under the same key byte, which keeps the distance low.
//! 2. For each of the best-ranked sizes, transpose the ciphertext into one
//!    column per key byte and solve every column as single-byte XOR.
//! 3. Keep the key whose full plaintext scores best.

use cpals_freq::score;
use cpals_xor::{hamming, repeating};
use tracing::{debug, trace};

use crate::error::CrackError;
use crate::options::KeySizeOptions;
use crate::single_byte;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySizeScore {
    pub key_size: usize,
    /// Mean Hamming distance between consecutive blocks, per byte.
    pub distance: f64,
}

/// Recovered repeating key and the plaintext it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingKey {
    pub key: Vec<u8>,
    /// [`cpals_freq::score`] of `plaintext`.
    pub score: f64,
    pub plaintext: Vec<u8>,
    /// Ranking distance of the key size this key was solved at.
    pub distance: f64,
}

/// Rank every key size in `opts` by normalised block distance, best first.
///
/// Sizes that do not fit at least two full blocks are left out, so the
/// result may be empty for short inputs.
pub fn rank_key_sizes(
    ciphertext: &[u8],
    opts: &KeySizeOptions,
) -> Result<Vec<KeySizeScore>, CrackError> {
    opts.validate()?;

    // Two full blocks are needed, so nothing above half the input can rank.
    let max_key_size = opts.max_key_size.min(ciphertext.len() / 2);

    let mut ranked = Vec::new();
    for key_size in opts.min_key_size..=max_key_size {
        let blocks: Vec<&[u8]> = ciphertext.chunks_exact(key_size).collect();
        if blocks.len() < 2 {
            continue;
        }

        let mut total = 0.0;
        for pair in blocks.windows(2) {
            total += hamming::distance(pair[0], pair[1])? as f64 / key_size as f64;
        }
        let distance = total / (blocks.len() - 1) as f64;
        trace!(key_size, distance, "key size candidate");

        ranked.push(KeySizeScore { key_size, distance });
    }

    ranked.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.key_size.cmp(&b.key_size))
    });
    Ok(ranked)
}

/// Split `bytes` into `size` columns: column `i` holds every byte whose
/// position is `i` modulo `size`.
pub fn transpose(bytes: &[u8], size: usize) -> Vec<Vec<u8>> {
    let mut columns = vec![Vec::new(); size];
    if size == 0 {
        return columns;
    }
    for (i, b) in bytes.iter().enumerate() {
        columns[i % size].push(*b);
    }
    columns
}

/// Shortest prefix of `key` that, repeated, reproduces `key` exactly.
///
/// Only divisors of `key.len()` are considered, so cycling the prefix over
/// any input gives the same stream as cycling `key`.
pub fn shortest_period(key: &[u8]) -> &[u8] {
    for period in 1..key.len() {
        if key.len() % period == 0 && key.chunks(period).all(|c| c == &key[..period]) {
            return &key[..period];
        }
    }
    key
}

/// Recover the key of a repeating-key XOR ciphertext.
///
/// The returned key is reduced with [`shortest_period`]. Ties between
/// candidates keep the better-ranked key size.
pub fn crack(ciphertext: &[u8], opts: &KeySizeOptions) -> Result<RepeatingKey, CrackError> {
    let ranked = rank_key_sizes(ciphertext, opts)?;
    if ranked.is_empty() {
        return Err(CrackError::InputTooShort {
            len: ciphertext.len(),
            min: opts.min_key_size,
            max: opts.max_key_size,
        });
    }

    let mut best: Option<RepeatingKey> = None;
    for candidate in ranked.iter().take(opts.candidates) {
        let key = transpose(ciphertext, candidate.key_size)
            .iter()
            .map(|column| single_byte::crack(column).map(|k| k.key))
            .collect::<Result<Vec<u8>, _>>()?;
        // Multiples of the real size rank well too; they solve to the key repeated.
        let key = shortest_period(&key).to_vec();

        let plaintext = repeating::xor(ciphertext, &key)?;
        let score = score(&plaintext);
        debug!(
            key_size = candidate.key_size,
            distance = candidate.distance,
            score,
            "repeating-key candidate"
        );

        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(RepeatingKey {
                key,
                score,
                plaintext,
                distance: candidate.distance,
            });
        }
    }

    best.ok_or(CrackError::InputTooShort {
        len: ciphertext.len(),
        min: opts.min_key_size,
        max: opts.max_key_size,
    })
}
