use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    #[error("Payload too short: need {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    #[error("Payload length {0} is not a multiple of the word size")]
    Unaligned(usize),

    #[error("Offset or length out of range")]
    InvalidOffset,

    #[error("Address word has non-zero padding")]
    InvalidAddress,

    #[error("Boolean word must be 0 or 1")]
    InvalidBool,

    #[error("String is not valid UTF-8")]
    InvalidUtf8,
}
