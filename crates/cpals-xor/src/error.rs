use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XorError {
    #[error("length mismatch: input is {input} bytes, key is {key} bytes")]
    LengthMismatch { input: usize, key: usize },

    #[error("key must not be empty")]
    EmptyKey,
}
