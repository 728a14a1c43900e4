//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ASSETS_URL, MOBILE_BREAKPOINT, TOAST_DISPLAY_MS, TOAST_FADE_MS};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Data endpoints
    pub data: DataConfig,
    /// Presentation settings
    pub ui: UiConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Data endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// URL of the asset list JSON
    pub assets_url: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            assets_url: DEFAULT_ASSETS_URL.to_string(),
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays fully visible
    pub toast_display_ms: u64,
    /// Fade-out duration before a toast is removed
    pub toast_fade_ms: u64,
    /// Viewport width at or below which the mobile menu closes on outside clicks
    pub mobile_breakpoint: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_display_ms: TOAST_DISPLAY_MS,
            toast_fade_ms: TOAST_FADE_MS,
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}
