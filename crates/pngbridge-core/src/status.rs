//! Status codes returned by the native reader
//!
//! The reader follows the convention of libpng's simplified API: a non-zero
//! value means the image was read, zero means it was not. The JNI bridge does
//! not interpret these values; it hands back whatever the reader returned.

/// The image was read into memory.
pub const STATUS_SUCCESS: i32 = 1;

/// The image could not be read, or the arguments could not be marshalled.
pub const STATUS_FAILURE: i32 = 0;

/// Collapse a result into a status code.
pub fn from_result<T, E>(result: &Result<T, E>) -> i32 {
    if result.is_ok() {
        STATUS_SUCCESS
    } else {
        STATUS_FAILURE
    }
}
