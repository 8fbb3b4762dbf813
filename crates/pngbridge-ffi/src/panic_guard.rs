//! Panic handling for FFI boundaries
//!
//! A panic must never unwind into a C caller or the JVM. Every exported
//! function runs its body through [`catch_panic`] and reports a caught panic
//! as a failure status.

use pngbridge_core::BridgeError;
use std::any::Any;
use std::panic;
use std::sync::Once;

/// Run `f`, converting a panic into [`BridgeError::Panic`]
///
/// The panic message is logged before it is returned.
///
/// # Example
///
/// ```ignore
/// #[unsafe(no_mangle)]
/// pub unsafe extern "C" fn test_read_png_from_memory(buffer: *const c_void, len: usize) -> i32 {
///     let result = catch_panic(|| unsafe { read_from_memory_impl(buffer, len) })
///         .and_then(|r| r);
///     status::from_result(&result)
/// }
/// ```
pub fn catch_panic<F, R>(f: F) -> Result<R, BridgeError>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| {
        let message = panic_to_string(&payload);
        tracing::error!("FFI panic caught: {}", message);
        BridgeError::Panic(message)
    })
}

fn panic_to_string(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Install a panic hook that reports panics through `tracing`
///
/// Only the first call installs the hook; the previous hook keeps running
/// after ours so that default stderr output is preserved.
pub fn install_panic_hook() {
    static INSTALLED: Once = Once::new();

    INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
                .unwrap_or("Box<dyn Any>");

            match info.location() {
                Some(location) => tracing::error!(
                    "PANIC at {}:{}:{}: {}",
                    location.file(),
                    location.line(),
                    location.column(),
                    payload
                ),
                None => tracing::error!("PANIC at unknown location: {}", payload),
            }

            previous(info);
        }));
    });
}
