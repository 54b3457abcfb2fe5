//! Configuration for BoxDraw
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Gesture settings (what a cancelled session does)
//! - Surface style (ARGB colours hosts paint rectangles and background with)

pub use boxdraw_core::CancelPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SettingsError, SettingsResult};

/// Gesture settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureSettings {
    /// Whether a cancelled session locks the rectangle it was drawing
    #[serde(default)]
    pub cancel_policy: CancelPolicy,
}

/// Surface colours, packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Rectangle fill
    pub box_color: u32,
    /// Background fill
    pub background_color: u32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            // translucent red
            box_color: 0x22ff0000,
            // off-white
            background_color: 0xfff8efe0,
        }
    }
}

impl SurfaceStyle {
    /// Splits an `0xAARRGGBB` colour into `[r, g, b, a]`.
    pub fn to_rgba(argb: u32) -> [u8; 4] {
        let [a, r, g, b] = argb.to_be_bytes();
        [r, g, b, a]
    }

    pub fn box_rgba(&self) -> [u8; 4] {
        Self::to_rgba(self.box_color)
    }

    pub fn background_rgba(&self) -> [u8; 4] {
        Self::to_rgba(self.background_color)
    }
}

/// Complete drawing surface configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Gesture settings
    #[serde(default)]
    pub gesture: GestureSettings,
    /// Surface style
    #[serde(default)]
    pub style: SurfaceStyle,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.style.box_color >> 24 == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "style.box_color".to_string(),
                reason: "alpha must be non-zero or rectangles are invisible".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
