//! TOML Selection Repository
//!
//! Implements the SelectionRepository port. Item paths are stored in their
//! encoded form, so names containing `/`, `\` or `;` survive unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::{PersistedSelection, SelectionRepository};
use crate::domain::value_objects::ObjectPath;
use crate::error::{WardrobeError, WardrobeResult};
use crate::infrastructure::fs::LocalFs;

/// TOML-based selection repository
pub struct TomlSelectionRepository {
    fs: LocalFs,
}

impl TomlSelectionRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TomlSelectionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSelection {
    version: u32,
    avatar: String,
    #[serde(default)]
    items: Vec<ObjectPath>,
}

impl SelectionRepository for TomlSelectionRepository {
    fn load(&self, path: &Path) -> WardrobeResult<Option<PersistedSelection>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }

        let content = self.fs.read(path)?;
        let parsed: TomlSelection = toml::from_str(&content).map_err(|e| WardrobeError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if parsed.version != PersistedSelection::VERSION {
            return Err(WardrobeError::VersionMismatch {
                file: path.to_path_buf(),
                found: parsed.version,
                expected: PersistedSelection::VERSION,
            });
        }

        Ok(Some(PersistedSelection::new(parsed.avatar, parsed.items)))
    }

    fn save(&self, selection: &PersistedSelection, path: &Path) -> WardrobeResult<()> {
        let toml_selection = TomlSelection {
            version: PersistedSelection::VERSION,
            avatar: selection.avatar.clone(),
            items: selection.items.clone(),
        };
        let content =
            toml::to_string_pretty(&toml_selection).map_err(|e| WardrobeError::Parse {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        self.fs.write(path, &content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_is_none() {
        let dir = tempdir().unwrap();
        let repo = TomlSelectionRepository::new();
        assert!(repo
            .load(&dir.path().join("Avatar.selection.toml"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn roundtrip_keeps_order_and_awkward_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Avatar.selection.toml");
        let repo = TomlSelectionRepository::new();
        let selection = PersistedSelection::new(
            "Avatar",
            vec![
                ObjectPath::new(["Tops", "Shirt/Red"]),
                ObjectPath::new(["Hat;Blue"]),
                ObjectPath::new(["Hips", "Chest", "Vest"]),
            ],
        );

        repo.save(&selection, &path).unwrap();
        let loaded = repo.load(&path).unwrap().unwrap();

        assert_eq!(loaded, selection);
    }

    #[test]
    fn file_lists_encoded_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Avatar.selection.toml");
        let repo = TomlSelectionRepository::new();

        repo.save(
            &PersistedSelection::new("Avatar", vec![ObjectPath::new(["Tops", "Shirt/Red"])]),
            &path,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let raw: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(raw["version"].as_integer(), Some(1));
        assert_eq!(raw["items"][0].as_str(), Some("Tops/Shirt\\/Red"));
    }

    #[test]
    fn invalid_path_in_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Avatar.selection.toml");
        std::fs::write(&path, "version = 1\navatar = \"Avatar\"\nitems = [\"a//b\"]\n").unwrap();

        let err = TomlSelectionRepository::new().load(&path).unwrap_err();
        assert!(matches!(err, WardrobeError::Parse { .. }));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Avatar.selection.toml");
        std::fs::write(&path, "version = 2\navatar = \"Avatar\"\n").unwrap();

        let err = TomlSelectionRepository::new().load(&path).unwrap_err();
        assert!(matches!(err, WardrobeError::VersionMismatch { found: 2, .. }));
    }
}
