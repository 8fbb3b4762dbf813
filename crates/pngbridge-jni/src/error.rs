//! Error types for JNI marshalling.

use thiserror::Error;

/// Errors raised while turning managed values into native arguments.
///
/// None of these reach the reader: the bridge logs them and returns the
/// failure status instead of calling it.
#[derive(Debug, Error)]
pub enum JniError {
    /// Failed to obtain a view of a Java string.
    #[error("String conversion failed: {0}")]
    StringConversion(String),

    /// Failed to access a Java array.
    #[error("Array access failed: {0}")]
    ArrayAccess(String),

    /// The path cannot be expressed as a null-terminated string.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
