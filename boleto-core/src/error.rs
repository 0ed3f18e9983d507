//! Error types for payment code decoding

use thiserror::Error;

/// Payment code error
#[derive(Debug, Error)]
pub enum Error {
    /// Input from a dynamic source was not textual
    #[error("Type error: payment code must be a string, got {0}")]
    Type(String),

    /// Digit count is neither 44 (bar) nor 47 (line)
    #[error("Length error: '{raw}' has {digits} digits, expected 44 (bar) or 47 (line)")]
    Length {
        /// Input as received
        raw: String,
        /// Digits left after stripping separators
        digits: usize,
    },

    /// A decoded field falls outside its plausible range
    #[error("Decode error in {field}: {reason}")]
    Decode {
        /// Field that failed to decode
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
