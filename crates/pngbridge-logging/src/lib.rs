//! pngbridge-logging - Tracing to host callback bridge
//!
//! This crate provides:
//! - [`CallbackLayer`] tracing layer that forwards events to a host callback
//! - [`LogCallback`] type for the C log callback function
//! - [`LogCallbackRegistry`] holding the callback and the active level

mod callback;
mod layer;

pub use callback::{LogCallback, LogCallbackRegistry};
pub use layer::{CallbackLayer, init_logging};
pub use pngbridge_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CallbackLayer, LogCallback, LogCallbackRegistry, LogLevel, init_logging};
}
