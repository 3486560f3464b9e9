//! Editor configuration
//!
//! Settings are stored as RON. Sections missing from a file fall back to
//! their defaults.

use std::path::Path;

use bc_renderer::RendererConfig;
use serde::{Deserialize, Serialize};

/// Sketch drawing settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SketchConfig {
    /// Snap clicks to existing points and lines
    pub snap_enabled: bool,
    /// Snap radius in plane-local units
    pub snap_radius: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_radius: 0.05,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EditorConfig {
    /// Camera and picking settings
    #[serde(default)]
    pub renderer: RendererConfig,
    /// Sketch settings
    #[serde(default)]
    pub sketch: SketchConfig,
}

impl EditorConfig {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
