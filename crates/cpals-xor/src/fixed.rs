use crate::error::XorError;

/// XOR two equal-length buffers byte by byte.
pub fn xor(input: &[u8], key: &[u8]) -> Result<Vec<u8>, XorError> {
    if input.len() != key.len() {
        return Err(XorError::LengthMismatch {
            input: input.len(),
            key: key.len(),
        });
    }

    Ok(input.iter().zip(key).map(|(i, k)| i ^ k).collect())
}
