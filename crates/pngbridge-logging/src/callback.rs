//! Host log callback registry

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pngbridge_core::LogLevel;
use std::ffi::{CString, c_char};
use std::sync::atomic::{AtomicU8, Ordering};

/// C callback function type for logging
///
/// # Parameters
/// - `level`: Log level (0=Trace, 1=Debug, 2=Info, 3=Warn, 4=Error)
/// - `target`: Log target (module path), null-terminated C string
/// - `message`: Log message, pointer to UTF-8 bytes
/// - `message_len`: Length of the message in bytes
///
/// Both pointers are only valid for the duration of the callback.
pub type LogCallback =
    extern "C" fn(level: u8, target: *const c_char, message: *const u8, message_len: usize);

static REGISTRY: OnceCell<LogCallbackRegistry> = OnceCell::new();

/// Holds the host callback and the level below which events are dropped
pub struct LogCallbackRegistry {
    callback: RwLock<Option<LogCallback>>,
    level: AtomicU8,
}

impl LogCallbackRegistry {
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Process-wide registry used by the exported functions
    pub fn global() -> &'static LogCallbackRegistry {
        REGISTRY.get_or_init(LogCallbackRegistry::new)
    }

    /// Register a callback, or clear it with `None`
    pub fn set_callback(&self, callback: Option<LogCallback>) {
        *self.callback.write() = callback;
    }

    pub fn callback(&self) -> Option<LogCallback> {
        *self.callback.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// True if `level` passes the filter and would reach a callback
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Hand one record to the callback, if one is registered and the level passes
    pub fn dispatch(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let Some(callback) = self.callback() else {
            return;
        };

        // Module paths never contain NUL; drop the record if one somehow does.
        let Ok(target) = CString::new(target) else {
            return;
        };

        callback(level as u8, target.as_ptr(), message.as_ptr(), message.len());
    }
}

impl Default for LogCallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}
