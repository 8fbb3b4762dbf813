//! Error types for PNG decoding

use pngbridge_core::BridgeError;
use thiserror::Error;

/// Errors that can occur while decoding a PNG.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a well-formed PNG.
    #[error("malformed PNG: {0}")]
    Format(String),

    /// Decoding would allocate more than the configured limit.
    #[error("decoded image exceeds limit of {limit} bytes")]
    LimitExceeded { limit: usize },

    /// The image uses parameters the decoder cannot handle.
    #[error("unsupported PNG: {0}")]
    Unsupported(String),
}

impl DecodeError {
    pub(crate) fn from_png(err: png::DecodingError, limit: usize) -> Self {
        match err {
            png::DecodingError::IoError(e) => DecodeError::Io(e),
            png::DecodingError::Format(e) => DecodeError::Format(e.to_string()),
            png::DecodingError::Parameter(e) => DecodeError::Unsupported(e.to_string()),
            png::DecodingError::LimitsExceeded => DecodeError::LimitExceeded { limit },
        }
    }
}

impl From<DecodeError> for BridgeError {
    fn from(err: DecodeError) -> Self {
        BridgeError::Decode(err.to_string())
    }
}
