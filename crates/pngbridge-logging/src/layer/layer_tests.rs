#![allow(non_snake_case)]

use super::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::prelude::*;

static CALL_COUNT: AtomicUsize = AtomicUsize::new(0);
static CAPTURED_LINE: Mutex<Option<String>> = Mutex::new(None);
// Serializes tests that share the callback statics above
static LAYER_TEST_LOCK: Mutex<()> = Mutex::new(());

extern "C" fn capture_callback(
    _level: u8,
    _target: *const std::ffi::c_char,
    message: *const u8,
    message_len: usize,
) {
    CALL_COUNT.fetch_add(1, Ordering::SeqCst);
    let slice = unsafe { std::slice::from_raw_parts(message, message_len) };
    if let Ok(line) = std::str::from_utf8(slice) {
        *CAPTURED_LINE.lock().unwrap() = Some(line.to_string());
    }
}

fn fresh_registry(level: LogLevel) -> &'static LogCallbackRegistry {
    let registry = Box::leak(Box::new(LogCallbackRegistry::new()));
    registry.set_level(level);
    registry.set_callback(Some(capture_callback));
    registry
}

#[test]
fn CallbackLayer___convert_level___maps_every_level() {
    assert_eq!(CallbackLayer::convert_level(&Level::TRACE), LogLevel::Trace);
    assert_eq!(CallbackLayer::convert_level(&Level::DEBUG), LogLevel::Debug);
    assert_eq!(CallbackLayer::convert_level(&Level::INFO), LogLevel::Info);
    assert_eq!(CallbackLayer::convert_level(&Level::WARN), LogLevel::Warn);
    assert_eq!(CallbackLayer::convert_level(&Level::ERROR), LogLevel::Error);
}

#[test]
fn CallbackLayer___events___filtered_by_registry_level() {
    let _guard = LAYER_TEST_LOCK.lock().unwrap();
    let registry = fresh_registry(LogLevel::Info);
    let subscriber = tracing_subscriber::registry().with(CallbackLayer::with_registry(registry));

    let before = CALL_COUNT.load(Ordering::SeqCst);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("kept");
        tracing::debug!("dropped");
        tracing::error!("kept");
    });

    assert_eq!(CALL_COUNT.load(Ordering::SeqCst) - before, 2);
}

#[test]
fn CallbackLayer___level_change___applies_to_same_callsite() {
    let _guard = LAYER_TEST_LOCK.lock().unwrap();
    let registry = fresh_registry(LogLevel::Warn);
    let subscriber = tracing_subscriber::registry().with(CallbackLayer::with_registry(registry));

    let before = CALL_COUNT.load(Ordering::SeqCst);
    tracing::subscriber::with_default(subscriber, || {
        for level in [LogLevel::Warn, LogLevel::Debug] {
            registry.set_level(level);
            tracing::info!("same callsite");
        }
    });

    assert_eq!(CALL_COUNT.load(Ordering::SeqCst) - before, 1);
}

#[test]
fn CallbackLayer___event_with_fields___renders_key_value_pairs() {
    let _guard = LAYER_TEST_LOCK.lock().unwrap();
    let registry = fresh_registry(LogLevel::Trace);
    let subscriber = tracing_subscriber::registry().with(CallbackLayer::with_registry(registry));

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(status = 1, len = 812, "read from memory");
    });

    let line = CAPTURED_LINE.lock().unwrap().clone();
    assert_eq!(line.as_deref(), Some("read from memory status=1 len=812"));
}

#[test]
fn CallbackLayer___event_without_message___renders_fields_only() {
    let _guard = LAYER_TEST_LOCK.lock().unwrap();
    let registry = fresh_registry(LogLevel::Trace);
    let subscriber = tracing_subscriber::registry().with(CallbackLayer::with_registry(registry));

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(path = "missing.png");
    });

    let line = CAPTURED_LINE.lock().unwrap().clone();
    assert_eq!(line.as_deref(), Some("path=missing.png"));
}

#[test]
fn init_logging___repeated_calls___only_update_level() {
    init_logging(LogLevel::Debug);
    init_logging(LogLevel::Error);

    assert_eq!(LogCallbackRegistry::global().level(), LogLevel::Error);
}
