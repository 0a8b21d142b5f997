use crate::error::XorError;

/// Number of differing bits between two equal-length buffers.
pub fn distance(a: &[u8], b: &[u8]) -> Result<u32, XorError> {
    if a.len() != b.len() {
        return Err(XorError::LengthMismatch {
            input: a.len(),
            key: b.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum())
}
