//! C ABI exported functions
//!
//! These functions are the entry points called by the JNI bridge and by
//! C or Swift hosts. Each one logs and collapses its errors into a status.

use crate::panic_guard::{catch_panic, install_panic_hook};
use crate::settings::Settings;
use pngbridge_core::{BridgeError, BridgeResult, LogLevel, status};
use pngbridge_decoder::{DecodedImage, decode_file, decode_memory};
use pngbridge_logging::{LogCallback, LogCallbackRegistry, init_logging};
use std::ffi::{CStr, c_char, c_void};
use std::path::Path;

/// Read the PNG file at `png_path` into memory
///
/// # Parameters
/// - `png_path`: Path of the file, null-terminated UTF-8
///
/// # Returns
/// 1 if the image was decoded, 0 if the path is null or not UTF-8, the file
/// cannot be read, or it is not a valid PNG
///
/// # Safety
/// - `png_path` must be null or point to a null-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn test_read_from_png_file_to_memory(png_path: *const c_char) -> i32 {
    let result = catch_panic(|| unsafe { read_from_file_impl(png_path) }).and_then(|r| r);

    match &result {
        Ok(image) => {
            tracing::debug!(width = image.width, height = image.height, "read png file");
        }
        Err(e) => tracing::warn!(code = e.error_code(), "read png file failed: {}", e),
    }
    status::from_result(&result)
}

unsafe fn read_from_file_impl(png_path: *const c_char) -> BridgeResult<DecodedImage> {
    if png_path.is_null() {
        return Err(BridgeError::InvalidPath("null path".to_string()));
    }

    // SAFETY: caller guarantees png_path is null-terminated
    let path = unsafe { CStr::from_ptr(png_path) }
        .to_str()
        .map_err(|e| BridgeError::InvalidPath(e.to_string()))?;

    let options = Settings::global().decode_options();
    Ok(decode_file(Path::new(path), &options)?)
}

/// Decode the PNG held in `buffer`
///
/// # Parameters
/// - `buffer`: Start of the encoded PNG
/// - `len`: Length of the encoded PNG in bytes
///
/// # Returns
/// 1 if the image was decoded, 0 otherwise. A null `buffer` with non-zero
/// `len` returns 0 without reading; with zero `len` it is an empty buffer.
///
/// # Safety
/// - `buffer` must be valid for reads of `len` bytes if not null
#[unsafe(no_mangle)]
pub unsafe extern "C" fn test_read_png_from_memory(buffer: *const c_void, len: usize) -> i32 {
    let result = catch_panic(|| unsafe { read_from_memory_impl(buffer, len) }).and_then(|r| r);

    match &result {
        Ok(image) => tracing::debug!(
            width = image.width,
            height = image.height,
            len,
            "read png from memory"
        ),
        Err(e) => {
            tracing::warn!(code = e.error_code(), len, "read png from memory failed: {}", e);
        }
    }
    status::from_result(&result)
}

unsafe fn read_from_memory_impl(buffer: *const c_void, len: usize) -> BridgeResult<DecodedImage> {
    let bytes: &[u8] = if buffer.is_null() {
        if len != 0 {
            return Err(BridgeError::Decode(format!("null buffer with length {len}")));
        }
        &[]
    } else {
        // SAFETY: caller guarantees buffer is valid for len bytes
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), len) }
    };

    let options = Settings::global().decode_options();
    Ok(decode_memory(bytes, &options)?)
}

/// Replace the process-wide configuration
///
/// # Parameters
/// - `config_json`: JSON configuration bytes (null resets to defaults)
/// - `config_len`: Length of config_json
///
/// # Returns
/// 1 if the configuration was applied, 0 if it was rejected (the previous
/// configuration stays active)
///
/// # Safety
/// - `config_json` must be valid for `config_len` bytes if not null
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pngbridge_configure(config_json: *const u8, config_len: usize) -> i32 {
    let result = catch_panic(|| {
        let bytes: &[u8] = if config_json.is_null() {
            &[]
        } else {
            // SAFETY: caller guarantees config_json is valid for config_len bytes
            unsafe { std::slice::from_raw_parts(config_json, config_len) }
        };
        Settings::global().apply_json(bytes)
    })
    .and_then(|result| result);

    match &result {
        Ok(()) => {
            tracing::info!(config = ?Settings::global().snapshot(), "configuration applied");
        }
        Err(e) => tracing::error!("failed to apply configuration: {}", e),
    }
    status::from_result(&result)
}

/// Route log records to `callback`, or stop forwarding with null
///
/// The first call installs the logging layer and the panic hook.
///
/// # Safety
/// - `callback` must stay valid until it is replaced or cleared
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pngbridge_set_log_callback(callback: Option<LogCallback>) {
    let _ = catch_panic(|| {
        LogCallbackRegistry::global().set_callback(callback);
        init_logging(LogCallbackRegistry::global().level());
        install_panic_hook();
    });
}

/// Set the log level (0=Trace, 1=Debug, 2=Info, 3=Warn, 4=Error, 5+=Off)
#[unsafe(no_mangle)]
pub extern "C" fn pngbridge_set_log_level(level: u8) {
    LogCallbackRegistry::global().set_level(LogLevel::from_u8(level));
}
