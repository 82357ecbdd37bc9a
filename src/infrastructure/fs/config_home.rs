//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs that ignore environment variables
//! on some systems, so tests could never isolate themselves from the real user
//! config. `wardrobe_config_home()`:
//! 1. Checks `WARDROBE_CONFIG_HOME` first (for test isolation)
//! 2. Falls back to `dirs::config_dir()/wardrobe`

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const WARDROBE_CONFIG_HOME_VAR: &str = "WARDROBE_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
pub fn wardrobe_config_home() -> Option<PathBuf> {
    std::env::var(WARDROBE_CONFIG_HOME_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("wardrobe")))
}
