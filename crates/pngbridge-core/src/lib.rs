//! pngbridge-core - Shared types for the PNG bridge
//!
//! This crate provides the types every other pngbridge crate agrees on:
//! - [`status`] codes returned across the C and JNI boundaries
//! - [`PngReader`], the seam between the JNI bridge and the native reader
//! - [`BridgeConfig`] and [`PixelFormat`] for process-wide configuration
//! - [`BridgeError`] for error handling before errors collapse into a status

mod config;
mod error;
mod reader;
pub mod status;

pub use config::{BridgeConfig, PixelFormat};
pub use error::{BridgeError, BridgeResult};
pub use reader::PngReader;
pub use status::{STATUS_FAILURE, STATUS_SUCCESS};

/// Log levels for FFI callbacks
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(BridgeError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeConfig, BridgeError, BridgeResult, LogLevel, PixelFormat, PngReader,
        STATUS_FAILURE, STATUS_SUCCESS,
    };
}
