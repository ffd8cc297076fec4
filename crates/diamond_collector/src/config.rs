//! Game configuration

use arcade_core::config::{Config, ConfigError, SessionConfig};
use arcade_core::render::TextureFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Texture settings
    pub assets: AssetConfig,

    /// Gameplay settings
    pub gameplay: SessionConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Window title
    pub title: String,
}

/// One texture to load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureConfig {
    /// Image path
    pub path: String,

    /// Sampling filter
    #[serde(default)]
    pub filter: TextureFilter,
}

/// Asset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Ship texture
    pub ship: TextureConfig,

    /// Texture shared by every pickup
    pub pickup: TextureConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Diamond Collector".to_string(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            ship: TextureConfig {
                path: "textures/ship.png".to_string(),
                filter: TextureFilter::Nearest,
            },
            pickup: TextureConfig {
                path: "textures/diamond.png".to_string(),
                filter: TextureFilter::Nearest,
            },
        }
    }
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("size must be non-zero, got {}x{}", self.window.width, self.window.height),
            });
        }
        self.gameplay.validate()
    }
}

impl GameConfig {
    /// Load configuration from `path`, or return the defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                log::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
