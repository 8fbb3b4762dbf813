//! Bridge configuration types

use crate::LogLevel;
use crate::error::BridgeError;
use serde::{Deserialize, Serialize};

/// Pixel layout of a decoded image
///
/// Every format uses 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    Gray,
    GrayAlpha,
    Rgb,
    #[default]
    Rgba,
}

impl PixelFormat {
    /// Number of 8-bit channels per pixel
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::GrayAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Process-wide configuration for the native reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Layout the reader decodes images into
    #[serde(default)]
    pub pixel_format: PixelFormat,

    /// Upper bound on the memory a single decode may allocate, in bytes
    #[serde(default = "default_max_decoded_bytes")]
    pub max_decoded_bytes: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_decoded_bytes() -> usize {
    64 * 1024 * 1024
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pixel_format: PixelFormat::default(),
            max_decoded_bytes: default_max_decoded_bytes(),
        }
    }
}

impl BridgeConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> Result<Self, BridgeError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<LogLevel, BridgeError> {
        self.log_level.parse()
    }

    fn validate(&self) -> Result<(), BridgeError> {
        self.log_level()?;
        if self.max_decoded_bytes == 0 {
            return Err(BridgeError::Config(
                "max_decoded_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
