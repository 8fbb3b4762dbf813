//! Process-wide reader configuration

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use pngbridge_core::{BridgeConfig, BridgeResult};
use pngbridge_decoder::DecodeOptions;
use pngbridge_logging::LogCallbackRegistry;

static GLOBAL: Lazy<Settings> = Lazy::new(Settings::new);

/// Holds the active [`BridgeConfig`]
///
/// Readers take a snapshot at the start of a call; the lock is never held
/// while an image is decoded.
pub struct Settings {
    config: RwLock<BridgeConfig>,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(BridgeConfig::default()),
        }
    }

    pub fn global() -> &'static Settings {
        &GLOBAL
    }

    /// Snapshot of the active configuration
    pub fn snapshot(&self) -> BridgeConfig {
        self.config.read().clone()
    }

    /// Decode options derived from the active configuration
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::from(&*self.config.read())
    }

    /// Replace the configuration and apply its log level
    pub fn apply(&self, config: BridgeConfig) -> BridgeResult<()> {
        let level = config.log_level()?;
        *self.config.write() = config;
        LogCallbackRegistry::global().set_level(level);
        Ok(())
    }

    /// Parse JSON and apply it; the previous configuration is kept on error
    pub fn apply_json(&self, bytes: &[u8]) -> BridgeResult<()> {
        let config = BridgeConfig::from_json(bytes)?;
        self.apply(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
