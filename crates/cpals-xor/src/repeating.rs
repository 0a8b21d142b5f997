use crate::error::XorError;

/// Repeating-key XOR: `key` is cycled over `input`.
///
/// Encryption and decryption are the same operation. The key may be longer
/// than the input; only its prefix is used then.
pub fn xor(input: &[u8], key: &[u8]) -> Result<Vec<u8>, XorError> {
    if key.is_empty() {
        return Err(XorError::EmptyKey);
    }

    Ok(input.iter().zip(key.iter().cycle()).map(|(i, k)| i ^ k).collect())
}
