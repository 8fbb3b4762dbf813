//! pngbridge-ffi - C ABI exports of the native PNG reader
//!
//! This crate is the native side the JNI bridge (and any C or Swift host)
//! calls into:
//! - [`NativeReader`], the [`PngReader`] that calls the exported functions
//! - C ABI exported functions that read a PNG and report a status
//!
//! # FFI Functions
//!
//! The following functions are exported with C linkage (see
//! `include/pngbridge.h`):
//!
//! - `test_read_from_png_file_to_memory` - Read a PNG file into memory
//! - `test_read_png_from_memory` - Decode a PNG held in memory
//! - `pngbridge_configure` - Replace the process-wide configuration
//! - `pngbridge_set_log_callback` - Route log records to a host callback
//! - `pngbridge_set_log_level` - Change the log level
//!
//! The read functions return [`STATUS_SUCCESS`] (1) when the image was
//! decoded and [`STATUS_FAILURE`] (0) otherwise.

mod exports;
mod panic_guard;
mod reader;
mod settings;

pub use exports::{
    pngbridge_configure, pngbridge_set_log_callback, pngbridge_set_log_level,
    test_read_from_png_file_to_memory, test_read_png_from_memory,
};
pub use panic_guard::{catch_panic, install_panic_hook};
pub use reader::NativeReader;
pub use settings::Settings;

pub use pngbridge_core::{BridgeConfig, PngReader, STATUS_FAILURE, STATUS_SUCCESS};
pub use pngbridge_logging::LogCallback;

// Serializes unit tests that replace the global settings or log level
#[cfg(test)]
static GLOBAL_STATE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
