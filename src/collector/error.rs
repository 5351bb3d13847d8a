use thiserror::Error;

/// Errors raised by collector stages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    #[error("Invalid bit token: {0:?}")]
    InvalidToken(String),

    #[error("Invalid bit range: {start}-{end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Bit index out of range (1-64): {0}")]
    IndexOutOfRange(u32),
}
