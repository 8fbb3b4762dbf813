//! [`PngReader`] backed by the exported C functions

use crate::exports::{test_read_from_png_file_to_memory, test_read_png_from_memory};
use pngbridge_core::PngReader;
use std::ffi::CStr;
use std::ptr;

/// Calls the native reader through its C ABI, exactly as a C host would
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeReader;

impl PngReader for NativeReader {
    fn read_file(&self, path: Option<&CStr>) -> i32 {
        let path_ptr = path.map_or(ptr::null(), CStr::as_ptr);
        // SAFETY: path_ptr is null or points to a CStr borrowed for this call
        unsafe { test_read_from_png_file_to_memory(path_ptr) }
    }

    fn read_memory(&self, bytes: Option<&[u8]>) -> i32 {
        let (buffer, len) = match bytes {
            Some(b) => (b.as_ptr().cast(), b.len()),
            None => (ptr::null(), 0),
        };
        // SAFETY: buffer is null with len 0, or valid for len bytes for this call
        unsafe { test_read_png_from_memory(buffer, len) }
    }
}
