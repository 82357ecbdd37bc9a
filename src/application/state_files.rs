//! Per-scene, per-avatar state file locations
//!
//! Selection and ledger files are keyed by the scene file and the avatar name,
//! as `<scene>.<avatar>.lock`. Handles in a ledger only mean something inside
//! the scene that allocated them, so two scenes sharing a directory must never
//! share a file. Both parts are mapped to a portable file stem first, so an
//! avatar called `Robo/Cat` still gets a single file inside the state directory.

use std::path::{Path, PathBuf};

/// Locations of the selection and ledger files for one scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFiles {
    dir: PathBuf,
    scene: String,
}

impl StateFiles {
    pub fn new(dir: impl Into<PathBuf>, scene_path: &Path) -> Self {
        let scene = scene_path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        Self {
            dir: dir.into(),
            scene: file_stem(&scene),
        }
    }

    pub fn selection_path(&self, avatar: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}.selection.toml", self.scene, file_stem(avatar)))
    }

    pub fn ledger_path(&self, avatar: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}.lock", self.scene, file_stem(avatar)))
    }
}

/// `[A-Za-z0-9_-]` kept, everything else becomes `_`.
pub fn file_stem(avatar: &str) -> String {
    let stem: String = avatar
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "avatar".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_in_state_dir() {
        let files = StateFiles::new("/scene/.wardrobe", Path::new("/scene/scene.toml"));
        assert_eq!(
            files.selection_path("Avatar"),
            Path::new("/scene/.wardrobe/scene.Avatar.selection.toml")
        );
        assert_eq!(
            files.ledger_path("Avatar"),
            Path::new("/scene/.wardrobe/scene.Avatar.lock")
        );
    }

    #[test]
    fn scenes_in_one_directory_get_distinct_files() {
        let a = StateFiles::new("/scenes/.wardrobe", Path::new("/scenes/a.toml"));
        let b = StateFiles::new("/scenes/.wardrobe", Path::new("/scenes/b.toml"));

        assert_ne!(a.ledger_path("Avatar"), b.ledger_path("Avatar"));
        assert_ne!(a.selection_path("Avatar"), b.selection_path("Avatar"));
    }

    #[test]
    fn stem_replaces_unportable_characters() {
        assert_eq!(file_stem("Robo/Cat v2"), "Robo_Cat_v2");
        assert_eq!(file_stem("../x"), "___x");
        assert_eq!(file_stem("Küken"), "K_ken");
        assert_eq!(file_stem(""), "avatar");
    }
}
