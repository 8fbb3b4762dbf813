//! Tracing layer that forwards events to the host callback

use crate::callback::LogCallbackRegistry;
use pngbridge_core::LogLevel;
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that renders each event as one line and hands it to the host
///
/// The `message` field comes first, followed by the remaining fields as
/// `key=value` pairs, e.g. `read from memory status=1 len=812`.
pub struct CallbackLayer {
    registry: &'static LogCallbackRegistry,
}

impl CallbackLayer {
    /// Create a layer bound to the global registry
    pub fn new() -> Self {
        Self {
            registry: LogCallbackRegistry::global(),
        }
    }

    /// Create a layer bound to a specific registry
    pub fn with_registry(registry: &'static LogCallbackRegistry) -> Self {
        Self { registry }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for CallbackLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for CallbackLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.registry.is_enabled(level) {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        self.registry
            .dispatch(level, metadata.target(), &visitor.into_line());
    }

    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The level can change at runtime, so no callsite may be cached as never.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.registry
            .is_enabled(Self::convert_level(metadata.level()))
    }
}

/// Collects the message and the structured fields of one event
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn into_line(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Install the callback layer as the global subscriber and set the level
///
/// Safe to call more than once: the subscriber is installed the first time,
/// later calls only change the level.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    LogCallbackRegistry::global().set_level(level);

    let subscriber = tracing_subscriber::registry().with(CallbackLayer::new());

    // Already installed on every call but the first.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
