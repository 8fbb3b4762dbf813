//! Error types for the PNG bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
///
/// These never cross the C or JNI boundary as values: they are logged and
/// collapsed into [`STATUS_FAILURE`](crate::STATUS_FAILURE).
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration could not be parsed or is out of range
    #[error("configuration error: {0}")]
    Config(String),

    /// A path could not be turned into a native string
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The image could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// A panic was caught at the FFI boundary
    #[error("panic at FFI boundary: {0}")]
    Panic(String),
}

impl BridgeError {
    /// Numeric code used in log records
    pub fn error_code(&self) -> u32 {
        match self {
            BridgeError::Config(_) => 1,
            BridgeError::InvalidPath(_) => 2,
            BridgeError::Decode(_) => 3,
            BridgeError::Panic(_) => 4,
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
