//! Configuration module for wardrobe
//!
//! Resolution order:
//! 1. Environment variables (WARDROBE_*)
//! 2. Scene-local config (`<scene_dir>/.wardrobe/config.toml`)
//! 3. User config (`<config_dir>/wardrobe/config.toml`)
//! 4. Built-in defaults
//!
//! Only the first config file found is read; files are not merged.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, GenerationConfig, LayoutConfig, StorageConfig};
