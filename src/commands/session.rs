//! Per-invocation state shared by all commands
//!
//! Loads configuration and the scene document, and knows where the selection
//! and ledger files for this scene and its avatar live.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wardrobe::application::{LoadedSelection, StateFiles};
use wardrobe::config::Config;
use wardrobe::domain::entities::{Ledger, Selection};
use wardrobe::domain::ports::{AvatarScene, LedgerRepository, SceneRepository};
use wardrobe::infrastructure::SceneDocument;
use wardrobe::presentation::factory;

use crate::ui::output::print_config_warnings;

pub struct Session {
    pub scene_path: PathBuf,
    pub scene: SceneDocument,
    pub config: Config,
    pub files: StateFiles,
}

impl Session {
    pub fn open(scene_path: &Path, json: bool) -> Result<Self> {
        let scene_dir = match scene_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (config, warnings) =
            Config::load_or_default(Some(&scene_dir)).context("failed to load configuration")?;
        print_config_warnings(&warnings, json);

        let scene = factory::create_scene_repository()
            .load(scene_path)
            .with_context(|| format!("failed to load scene {}", scene_path.display()))?;

        Ok(Self {
            scene_path: scene_path.to_path_buf(),
            files: StateFiles::new(config.state_dir(&scene_dir), scene_path),
            scene,
            config,
        })
    }

    pub fn avatar(&self) -> &str {
        self.scene.avatar()
    }

    pub fn load_selection(&self) -> Result<LoadedSelection> {
        let path = self.files.selection_path(self.avatar());
        factory::create_selection_use_case()
            .load(&path, self.scene.hierarchy(), self.scene.avatar_root())
            .with_context(|| format!("failed to load selection {}", path.display()))
    }

    pub fn save_selection(&self, selection: &Selection) -> Result<()> {
        let path = self.files.selection_path(self.avatar());
        factory::create_selection_use_case()
            .save(
                &path,
                selection,
                self.scene.hierarchy(),
                self.scene.avatar_root(),
            )
            .with_context(|| format!("failed to save selection {}", path.display()))
    }

    pub fn load_ledger(&self) -> Result<Ledger> {
        let path = self.files.ledger_path(self.avatar());
        factory::create_ledger_repository()
            .load_or_new(&path, self.avatar())
            .with_context(|| format!("failed to load ledger {}", path.display()))
    }

    /// Persist the scene, then the ledger. An empty ledger removes the file.
    pub fn commit(&self, ledger: &Ledger) -> Result<()> {
        factory::create_scene_repository()
            .save(&self.scene, &self.scene_path)
            .with_context(|| format!("failed to save scene {}", self.scene_path.display()))?;

        let path = self.files.ledger_path(self.avatar());
        let repo = factory::create_ledger_repository();
        if ledger.is_empty() {
            repo.delete(&path)
        } else {
            repo.save(ledger, &path)
        }
        .with_context(|| format!("failed to write ledger {}", path.display()))
    }
}
