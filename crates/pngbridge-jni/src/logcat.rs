//! Log sink registered by `JNI_OnLoad`
//!
//! On Android each record is written to logcat under [`TAG`]. Other targets
//! (a desktop JVM running the same library) get the record on stderr.

use pngbridge_core::LogLevel;
use std::borrow::Cow;
use std::ffi::{CStr, CString, c_char, c_int};

/// logcat tag for every record
pub const TAG: &CStr = c"pngbridge";

/// [`LogCallback`](pngbridge_logging::LogCallback) that writes to logcat
pub extern "C" fn write_record(
    level: u8,
    target: *const c_char,
    message: *const u8,
    message_len: usize,
) {
    let target = if target.is_null() {
        Cow::Borrowed("")
    } else {
        // SAFETY: the registry passes a null-terminated target valid for this call
        unsafe { CStr::from_ptr(target) }.to_string_lossy()
    };
    let message = if message.is_null() {
        &[][..]
    } else {
        // SAFETY: the registry passes message_len bytes valid for this call
        unsafe { std::slice::from_raw_parts(message, message_len) }
    };

    let text = format_record(&target, &String::from_utf8_lossy(message));
    write_line(priority(LogLevel::from_u8(level)), &text);
}

/// android_LogPriority value for a level (values from `<android/log.h>`)
pub fn priority(level: LogLevel) -> c_int {
    match level {
        LogLevel::Trace => 2,
        LogLevel::Debug => 3,
        LogLevel::Info => 4,
        LogLevel::Warn => 5,
        LogLevel::Error => 6,
        LogLevel::Off => 8,
    }
}

/// One logcat line: `target: message`
pub fn format_record(target: &str, message: &str) -> CString {
    let line = if target.is_empty() {
        message.to_string()
    } else {
        format!("{target}: {message}")
    };
    // NUL would truncate the line in logcat
    CString::new(line.replace('\0', " ")).unwrap_or_default()
}

#[cfg(target_os = "android")]
fn write_line(priority: c_int, text: &CStr) {
    // SAFETY: both pointers are null-terminated and outlive the call
    unsafe {
        android_log_sys::__android_log_write(priority, TAG.as_ptr(), text.as_ptr());
    }
}

#[cfg(not(target_os = "android"))]
fn write_line(priority: c_int, text: &CStr) {
    eprintln!("{} [{}] {}", TAG.to_string_lossy(), priority, text.to_string_lossy());
}
