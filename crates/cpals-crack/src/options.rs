use crate::error::CrackError;

/// Key-size search configuration for the repeating-key attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizeOptions {
    /// Smallest key size tried.
    pub min_key_size: usize,
    /// Largest key size tried (inclusive).
    pub max_key_size: usize,
    /// How many of the best-ranked key sizes are fully cracked and compared.
    pub candidates: usize,
}

impl Default for KeySizeOptions {
    fn default() -> Self {
        Self {
            min_key_size: 2,
            max_key_size: 40,
            candidates: 3,
        }
    }
}

impl KeySizeOptions {
    pub fn validate(&self) -> Result<(), CrackError> {
        if self.min_key_size == 0 {
            return Err(CrackError::InvalidOptions("min_key_size must be at least 1"));
        }
        if self.min_key_size > self.max_key_size {
            return Err(CrackError::InvalidOptions(
                "min_key_size must not exceed max_key_size",
            ));
        }
        if self.candidates == 0 {
            return Err(CrackError::InvalidOptions("candidates must be at least 1"));
        }
        Ok(())
    }
}
