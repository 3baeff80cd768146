//! Widget configuration
//!
//! Everything that used to be read from ambient state (device class, debug
//! overlay, spring tuning) is resolved once into a [`BubbleConfig`] and passed
//! explicitly to the catalog builder and the shells.
//!
//! ```toml
//! device = "mobile"
//! variant = "carousel"
//! debug = true
//! assets_dir = "public"
//!
//! [spring]
//! stiffness = 400
//! damping = 40
//!
//! [thresholds]
//! velocity = 40
//! ```

use std::path::{Path, PathBuf};

use bubble_animation::SpringConfig;
use bubble_core::{DeviceClass, Thresholds};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Which widget to mount
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Text bubble with inline pills, zoomable images and a draggable card
    #[default]
    Bubble,
    /// Bare carousel with a title strip and optional debug overlay
    Carousel,
    /// Bubble that expands to reveal an image when its pill is clicked
    Expand,
}

/// Commit threshold settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThresholdConfig {
    /// Release velocity (px/s) that commits a swipe
    pub velocity: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            velocity: Thresholds::default().velocity,
        }
    }
}

/// Host window size used to center the bubble
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Resolved widget configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BubbleConfig {
    pub device: DeviceClass,
    pub variant: Variant,
    /// Show the velocity/offset/index overlay line
    pub debug: bool,
    pub spring: SpringConfig,
    pub thresholds: ThresholdConfig,
    /// Directory item image URLs are resolved against
    pub assets_dir: PathBuf,
    pub viewport: Viewport,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            device: DeviceClass::default(),
            variant: Variant::default(),
            debug: false,
            spring: SpringConfig::carousel(),
            thresholds: ThresholdConfig::default(),
            assets_dir: PathBuf::from("public"),
            viewport: Viewport::default(),
        }
    }
}

impl BubbleConfig {
    /// Parse from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if given and present, otherwise fall back to defaults
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match Self::load(path) {
            Err(AppError::ConfigRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!("Config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Card width for the configured variant
    ///
    /// The carousel variant was designed at a fixed 400px regardless of device.
    pub fn display_width(&self) -> f32 {
        match self.variant {
            Variant::Carousel => 400.0,
            Variant::Bubble | Variant::Expand => self.device.display_width(),
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            velocity: self.thresholds.velocity,
        }
    }
}
