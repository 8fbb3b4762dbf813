//! pngbridge-jni - JNI bridge for the native PNG reader
//!
//! This crate is the shared library an Android app loads with
//! `System.loadLibrary("androidtests")`. Each entry point borrows a managed
//! value, turns it into native arguments and makes exactly one call into the
//! reader exported by `pngbridge-ffi`, returning the reader's status as-is.
//!
//! # Kotlin declarations
//!
//! ```kotlin
//! companion object {
//!     init { System.loadLibrary("androidtests") }
//!
//!     external fun testReadFromPngFileToMemoryJNI(filePath: String): Int
//!     external fun testReadPngFromMemoryJNI(byteArray: ByteArray): Int
//!     external fun configureJNI(configJson: ByteArray): Int
//!     external fun setLogLevelJNI(level: Int)
//! }
//! ```
//!
//! # Borrowed values
//!
//! Strings are read through `GetStringUTFChars` and arrays through
//! `GetByteArrayElements`; both views are held by guards that release them
//! when the call returns, on every path. Java's modified UTF-8 is decoded
//! strictly to standard UTF-8 before the path reaches the reader; a string
//! with an unpaired surrogate has no UTF-8 form and fails without a call.

mod error;
mod forward;
mod logcat;

use error::JniError;
use jni::JNIEnv;
use jni::objects::{JByteArray, JObject, JString, ReleaseMode};
use jni::sys::{JNI_VERSION_1_6, jint};
use pngbridge_core::{LogLevel, STATUS_FAILURE, STATUS_SUCCESS};
use pngbridge_ffi::{NativeReader, Settings, catch_panic, install_panic_hook};
use pngbridge_logging::{LogCallbackRegistry, init_logging};
use std::ffi::c_void;
use std::panic::AssertUnwindSafe;

/// Called by the JVM when the library is loaded.
///
/// Routes native log records to logcat at the configured level.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    install_panic_hook();
    LogCallbackRegistry::global().set_callback(Some(logcat::write_record));
    init_logging(LogCallbackRegistry::global().level());
    tracing::debug!("pngbridge JNI library loaded");
    JNI_VERSION_1_6
}

// ============================================================================
// MainActivity.Companion native methods
// ============================================================================

/// Read the PNG file at `file_path` into memory.
///
/// # Returns
/// The reader's status (1 = decoded, 0 = failed), or 0 if the path could not
/// be marshalled
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_alambov_androidtests_MainActivity_00024Companion_testReadFromPngFileToMemoryJNI<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    file_path: JString<'local>,
) -> jint {
    guarded("testReadFromPngFileToMemoryJNI", || {
        read_from_path_impl(&mut env, &file_path)
    })
}

fn read_from_path_impl(env: &mut JNIEnv, file_path: &JString) -> Result<jint, JniError> {
    if file_path.is_null() {
        return forward::read_from_java_path(&NativeReader, None);
    }

    // Released by the guard's Drop, including on early return
    let chars = env
        .get_string(file_path)
        .map_err(|e| JniError::StringConversion(e.to_string()))?;

    forward::read_from_java_path(&NativeReader, Some(&*chars))
}

/// Decode the PNG held in `byte_array`.
///
/// # Returns
/// The reader's status (1 = decoded, 0 = failed), or 0 if the array could not
/// be accessed
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_alambov_androidtests_MainActivity_00024Companion_testReadPngFromMemoryJNI<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    byte_array: JByteArray<'local>,
) -> jint {
    guarded("testReadPngFromMemoryJNI", || {
        read_from_memory_impl(&mut env, &byte_array)
    })
}

fn read_from_memory_impl(env: &mut JNIEnv, byte_array: &JByteArray) -> Result<jint, JniError> {
    if byte_array.is_null() {
        return Ok(forward::read_from_memory(&NativeReader, None));
    }

    // SAFETY: no other view of this array's elements exists during the call,
    // and the reader only reads through it
    let elements = unsafe { env.get_array_elements(byte_array, ReleaseMode::NoCopyBack) }
        .map_err(|e| JniError::ArrayAccess(e.to_string()))?;

    Ok(forward::read_from_memory(
        &NativeReader,
        Some(bytemuck_cast_slice(&elements)),
    ))
}

/// Replace the reader configuration with the JSON in `config_json`.
///
/// # Returns
/// 1 if applied, 0 if the JSON was rejected (previous configuration kept)
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_alambov_androidtests_MainActivity_00024Companion_configureJNI<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    config_json: JByteArray<'local>,
) -> jint {
    guarded("configureJNI", || configure_impl(&mut env, &config_json))
}

fn configure_impl(env: &mut JNIEnv, config_json: &JByteArray) -> Result<jint, JniError> {
    let bytes = if config_json.is_null() {
        Vec::new()
    } else {
        let len = env
            .get_array_length(config_json)
            .map_err(|e| JniError::ArrayAccess(e.to_string()))?;
        let mut bytes = vec![0u8; len as usize];
        env.get_byte_array_region(config_json, 0, bytemuck_cast_slice_mut(&mut bytes))
            .map_err(|e| JniError::ArrayAccess(e.to_string()))?;
        bytes
    };

    match Settings::global().apply_json(&bytes) {
        Ok(()) => Ok(STATUS_SUCCESS),
        Err(e) => {
            tracing::error!("configureJNI rejected configuration: {}", e);
            Ok(STATUS_FAILURE)
        }
    }
}

/// Set the native log level (0=Trace .. 4=Error, anything else = Off).
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_alambov_androidtests_MainActivity_00024Companion_setLogLevelJNI<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    level: jint,
) {
    let level = u8::try_from(level).map_or(LogLevel::Off, LogLevel::from_u8);
    LogCallbackRegistry::global().set_level(level);
}

// ============================================================================
// Helper functions
// ============================================================================

/// Run an entry point body, mapping marshalling errors and panics to failure.
fn guarded<F>(entry: &'static str, f: F) -> jint
where
    F: FnOnce() -> Result<jint, JniError>,
{
    match catch_panic(AssertUnwindSafe(f)) {
        Ok(Ok(status)) => status,
        Ok(Err(e)) => {
            tracing::warn!(entry, "marshalling failed: {}", e);
            STATUS_FAILURE
        }
        Err(e) => {
            tracing::error!(entry, "{}", e);
            STATUS_FAILURE
        }
    }
}

/// Cast a &[i8] to &[u8] for reading JNI byte arrays.
fn bytemuck_cast_slice(bytes: &[i8]) -> &[u8] {
    // SAFETY: u8 and i8 have the same size and alignment
    unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const u8, bytes.len()) }
}

/// Cast a &mut [u8] to &mut [i8] for JNI byte array operations.
fn bytemuck_cast_slice_mut(bytes: &mut [u8]) -> &mut [i8] {
    // SAFETY: u8 and i8 have the same size and alignment
    unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr() as *mut i8, bytes.len()) }
}
