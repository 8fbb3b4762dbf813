//! The seam between the JNI bridge and the native PNG reader

use std::ffi::CStr;

/// A PNG reader the bridge forwards calls to
///
/// The returned integer is opaque to the bridge and is handed back to the
/// managed caller unchanged. `None` stands for a null handle on the managed
/// side; the bridge forwards it rather than rejecting it.
pub trait PngReader {
    /// Read the PNG file at `path` into memory.
    fn read_file(&self, path: Option<&CStr>) -> i32;

    /// Decode the PNG held in `bytes`.
    fn read_memory(&self, bytes: Option<&[u8]>) -> i32;
}

impl<R: PngReader + ?Sized> PngReader for &R {
    fn read_file(&self, path: Option<&CStr>) -> i32 {
        (**self).read_file(path)
    }

    fn read_memory(&self, bytes: Option<&[u8]>) -> i32 {
        (**self).read_memory(bytes)
    }
}
