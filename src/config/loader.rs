//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{WardrobeError, WardrobeResult};
use crate::infrastructure::fs::wardrobe_config_home;

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WardrobeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WardrobeError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from scene-local config, user config, or defaults.
///
/// The first file found wins; environment overrides are applied on top and
/// the result is validated.
pub fn load_or_default(scene_dir: Option<&Path>) -> WardrobeResult<(Config, Vec<ConfigWarning>)> {
    let candidates = scene_dir
        .map(|dir| dir.join(".wardrobe/config.toml"))
        .into_iter()
        .chain(wardrobe_config_home().map(|dir| dir.join("config.toml")));

    let (config, warnings) = match candidates.into_iter().find(|path| path.exists()) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    let config = with_env_overrides(config);
    config.validate()?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (WARDROBE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    let generation = &mut config.generation;

    for (var, field) in [
        ("WARDROBE_PARAMETER_NAME", &mut generation.parameter_name),
        ("WARDROBE_LAYER_NAME", &mut generation.layer_name),
        ("WARDROBE_MENU_NAME", &mut generation.menu_name),
        ("WARDROBE_CLIP_PREFIX", &mut generation.clip_prefix),
    ] {
        if let Ok(value) = std::env::var(var) {
            *field = value;
        }
    }

    // WARDROBE_SAVED
    if let Ok(val) = std::env::var("WARDROBE_SAVED") {
        generation.saved = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generation",
        "parameter_name",
        "layer_name",
        "menu_name",
        "clip_prefix",
        "saved",
        "layer_weight",
        "layout",
        "x",
        "row_height",
        "storage",
        "state_dir",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && dist < unknown.len() => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
