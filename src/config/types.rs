//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{BuilderSettings, StateLayout};
use crate::error::{WardrobeError, WardrobeResult};

use super::loader::{self, ConfigWarning};

/// Names and knobs for generated content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_name")]
    pub parameter_name: String,

    #[serde(default = "default_name")]
    pub layer_name: String,

    #[serde(default = "default_name")]
    pub menu_name: String,

    #[serde(default = "default_clip_prefix")]
    pub clip_prefix: String,

    /// Keep the parameter value across sessions on the host
    #[serde(default = "default_true")]
    pub saved: bool,

    #[serde(default = "default_layer_weight")]
    pub layer_weight: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            parameter_name: default_name(),
            layer_name: default_name(),
            menu_name: default_name(),
            clip_prefix: default_clip_prefix(),
            saved: true,
            layer_weight: default_layer_weight(),
        }
    }
}

fn default_name() -> String {
    "Wardrobe".to_string()
}

fn default_clip_prefix() -> String {
    "Wardrobe_".to_string()
}

fn default_true() -> bool {
    true
}

fn default_layer_weight() -> f32 {
    1.0
}

/// Editor graph placement of generated states
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_x")]
    pub x: f32,

    #[serde(default = "default_row_height")]
    pub row_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            row_height: default_row_height(),
        }
    }
}

fn default_x() -> f32 {
    300.0
}

fn default_row_height() -> f32 {
    100.0
}

/// Where selection and ledger files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Relative paths are taken from the scene file's directory
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".wardrobe")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WardrobeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from scene-local config, user config, or defaults
    pub fn load_or_default(scene_dir: Option<&Path>) -> WardrobeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(scene_dir)
    }

    /// Apply environment variable overrides (WARDROBE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject values no build could use
    pub fn validate(&self) -> WardrobeResult<()> {
        let generation = &self.generation;
        for (key, value) in [
            ("generation.parameter_name", &generation.parameter_name),
            ("generation.layer_name", &generation.layer_name),
            ("generation.menu_name", &generation.menu_name),
            ("generation.clip_prefix", &generation.clip_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(WardrobeError::InvalidConfig {
                    message: format!("{key} must not be empty"),
                });
            }
        }

        for (key, value) in [
            ("generation.layer_weight", generation.layer_weight),
            ("layout.x", self.layout.x),
            ("layout.row_height", self.layout.row_height),
        ] {
            if !value.is_finite() {
                return Err(WardrobeError::InvalidConfig {
                    message: format!("{key} must be a finite number, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Settings for the selector builder
    pub fn builder_settings(&self) -> BuilderSettings {
        BuilderSettings {
            parameter_name: self.generation.parameter_name.clone(),
            layer_name: self.generation.layer_name.clone(),
            menu_name: self.generation.menu_name.clone(),
            clip_prefix: self.generation.clip_prefix.clone(),
            saved: self.generation.saved,
            default_weight: self.generation.layer_weight,
            layout: StateLayout {
                x: self.layout.x,
                row_height: self.layout.row_height,
            },
        }
    }

    /// State directory resolved against the scene file's directory
    pub fn state_dir(&self, scene_dir: &Path) -> PathBuf {
        if self.storage.state_dir.is_absolute() {
            self.storage.state_dir.clone()
        } else {
            scene_dir.join(&self.storage.state_dir)
        }
    }
}
