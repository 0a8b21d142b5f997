//! English plaintext scoring by letter frequency.

/// Relative frequency (percent) of each lowercase letter in English text,
/// most frequent first.
pub const ENGLISH_FREQ: &[(u8, f64)] = &[
    (b'e', 12.70),
    (b't', 9.06),
    (b'a', 8.17),
    (b'o', 7.51),
    (b'i', 6.97),
    (b'n', 6.75),
    (b's', 6.33),
    (b'h', 6.09),
    (b'r', 5.99),
    (b'd', 4.25),
    (b'l', 4.03),
    (b'c', 2.78),
    (b'u', 2.76),
    (b'm', 2.41),
    (b'w', 2.36),
    (b'f', 2.23),
    (b'g', 2.02),
    (b'y', 1.97),
    (b'p', 1.93),
    (b'b', 1.29),
    (b'v', 0.98),
    (b'k', 0.77),
    (b'j', 0.15),
    (b'x', 0.15),
    (b'q', 0.10),
    (b'z', 0.07),
];

/// How closely the letter distribution of `bytes` matches English, in `[0, 1]`.
///
/// Only ASCII letters are counted. Counting is case-sensitive: uppercase
/// letters add to the total but never match the (lowercase) table, so
/// mostly-lowercase text scores best.
///
/// Returns `0.0` when there are no letters at all.
pub fn english_likeness(bytes: &[u8]) -> f64 {
    let mut counts = [0usize; 128];
    let mut letters = 0usize;

    for &b in bytes.iter().filter(|b| b.is_ascii_alphabetic()) {
        counts[b as usize] += 1;
        letters += 1;
    }

    if letters == 0 {
        return 0.0;
    }

    let fit: f64 = ENGLISH_FREQ
        .iter()
        .map(|&(c, expected)| {
            let observed = counts[c as usize] as f64 / letters as f64 * 100.0;
            1.0 - (observed - expected).abs() / 100.0
        })
        .sum();

    fit / ENGLISH_FREQ.len() as f64
}

/// Whether a byte can appear in ordinary text.
pub fn is_printable(b: u8) -> bool {
    b.is_ascii_graphic() || matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Fraction of `bytes` that are printable, in `[0, 1]`. `0.0` when empty.
pub fn printable_ratio(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let printable = bytes.iter().filter(|&&b| is_printable(b)).count();
    printable as f64 / bytes.len() as f64
}

/// Ranking score for a candidate plaintext: letter fit weighted by how much
/// of it is printable. Higher is more English-like.
pub fn score(bytes: &[u8]) -> f64 {
    english_likeness(bytes) * printable_ratio(bytes)
}
