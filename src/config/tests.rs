//! Tests for the config module

use super::loader::suggest_key;
use super::types::*;
use crate::error::WardrobeError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.generation.parameter_name, "Wardrobe");
    assert_eq!(config.generation.layer_name, "Wardrobe");
    assert_eq!(config.generation.menu_name, "Wardrobe");
    assert_eq!(config.generation.clip_prefix, "Wardrobe_");
    assert!(config.generation.saved);
    assert_eq!(config.generation.layer_weight, 1.0);
    assert_eq!(config.layout.x, 300.0);
    assert_eq!(config.layout.row_height, 100.0);
    assert_eq!(config.storage.state_dir, Path::new(".wardrobe"));
}

#[test]
fn test_default_builder_settings_match_builder_defaults() {
    assert_eq!(
        Config::default().builder_settings(),
        crate::domain::services::BuilderSettings::default()
    );
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[generation]
parameter_name = "Outfit"
clip_prefix = "Outfit_"
saved = false

[layout]
row_height = 80.0

[storage]
state_dir = "state"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.generation.parameter_name, "Outfit");
    assert_eq!(config.generation.layer_name, "Wardrobe");
    assert!(!config.generation.saved);
    assert_eq!(config.layout.x, 300.0);
    assert_eq!(config.layout.row_height, 80.0);

    let settings = config.builder_settings();
    assert_eq!(settings.clip_prefix, "Outfit_");
    assert_eq!(settings.layout.row_height, 80.0);
}

#[test]
fn test_unknown_keys_warn_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[generation]\nparameter_nam = \"Outfit\"\n\n[storage]\nstate_dir = \"s\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.generation.parameter_name, "Wardrobe");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "parameter_nam");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("parameter_name"));
}

#[test]
fn test_suggest_key_ignores_distant_names() {
    assert_eq!(suggest_key("row_heigth").as_deref(), Some("row_height"));
    assert_eq!(suggest_key("completely_unrelated"), None);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[generation\nsaved = ").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, WardrobeError::Parse { .. }));
}

#[test]
fn test_validate_rejects_empty_names() {
    let mut config = Config::default();
    config.generation.layer_name = "  ".to_string();

    let err = config.validate().unwrap_err();
    assert!(
        matches!(err, WardrobeError::InvalidConfig { ref message } if message.contains("layer_name"))
    );
}

#[test]
fn test_validate_rejects_non_finite_weight() {
    let mut config = Config::default();
    config.generation.layer_weight = f32::NAN;

    assert!(matches!(
        config.validate(),
        Err(WardrobeError::InvalidConfig { .. })
    ));
}

#[test]
fn test_scene_local_config_is_preferred() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".wardrobe")).unwrap();
    fs::write(
        dir.path().join(".wardrobe/config.toml"),
        "[generation]\nmenu_name = \"Clothes\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_or_default(Some(dir.path())).unwrap();

    assert_eq!(config.generation.menu_name, "Clothes");
    assert!(warnings.is_empty());
}

#[test]
fn test_state_dir_is_relative_to_scene_dir() {
    let config = Config::default();
    assert_eq!(
        config.state_dir(Path::new("/scenes/avatar")),
        Path::new("/scenes/avatar/.wardrobe")
    );

    let mut absolute = Config::default();
    absolute.storage.state_dir = std::env::temp_dir().join("wardrobe-state");
    assert_eq!(
        absolute.state_dir(Path::new("/scenes/avatar")),
        std::env::temp_dir().join("wardrobe-state")
    );
}
