use cpals_xor::XorError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrackError {
    #[error("nothing to crack: input is empty")]
    EmptyInput,

    #[error("ciphertext of {len} bytes is too short for key sizes {min}..={max}")]
    InputTooShort { len: usize, min: usize, max: usize },

    #[error("invalid key size options: {0}")]
    InvalidOptions(&'static str),

    #[error(transparent)]
    Xor(#[from] XorError),
}
