//! Argument marshalling between the JNI entry points and a [`PngReader`]
//!
//! Each function performs exactly one reader call and returns its value
//! unchanged. Nothing here needs a JVM, so the forwarding contract is tested
//! against a recording reader.

use crate::error::JniError;
use jni::strings::JNIStr;
use pngbridge_core::PngReader;
use std::ffi::CString;

/// Forward a path borrowed from `GetStringUTFChars` to [`PngReader::read_file`]
///
/// The modified UTF-8 is decoded strictly: a string the JVM could hold but
/// UTF-8 cannot (an unpaired surrogate) is an error, never a replacement
/// character. `None` is forwarded as a null path.
///
/// # Errors
/// [`JniError::StringConversion`] if the bytes are not valid modified UTF-8,
/// or [`JniError::InvalidPath`] if they decode to a NUL character. The reader
/// is not called in either case.
pub fn read_from_java_path<R: PngReader>(
    reader: &R,
    path: Option<&JNIStr>,
) -> Result<i32, JniError> {
    let Some(path) = path else {
        return read_from_path(reader, None);
    };

    let path = cesu8::from_java_cesu8(path.to_bytes())
        .map_err(|e| JniError::StringConversion(e.to_string()))?;
    read_from_path(reader, Some(&*path))
}

/// Forward a path to [`PngReader::read_file`]
///
/// `path` is already UTF-8 (decoded from Java's modified UTF-8 by the caller);
/// it is copied into a null-terminated string for the reader. `None` is
/// forwarded as a null path.
///
/// # Errors
/// [`JniError::InvalidPath`] if the path contains a NUL character; the reader
/// is not called in that case.
pub fn read_from_path<R: PngReader>(reader: &R, path: Option<&str>) -> Result<i32, JniError> {
    let Some(path) = path else {
        return Ok(reader.read_file(None));
    };

    let c_path = CString::new(path).map_err(|e| JniError::InvalidPath(e.to_string()))?;
    Ok(reader.read_file(Some(c_path.as_c_str())))
}

/// Forward a byte buffer to [`PngReader::read_memory`]
///
/// The buffer is passed through as-is, including when it is empty. `None` is
/// forwarded as a null buffer.
pub fn read_from_memory<R: PngReader>(reader: &R, bytes: Option<&[u8]>) -> i32 {
    reader.read_memory(bytes)
}
