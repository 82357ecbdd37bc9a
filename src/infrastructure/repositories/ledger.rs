//! TOML Ledger Repository
//!
//! Implements the LedgerRepository port using TOML format.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{GeneratedArtifacts, Ledger};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::LedgerRepository;
use crate::domain::value_objects::{ArtifactId, ContentHash};
use crate::error::{WardrobeError, WardrobeResult};
use crate::infrastructure::fs::LocalFs;

/// TOML-based ledger repository
///
/// Stores the ledger as `<scene>.<avatar>.lock` in TOML format. A ledger
/// written for another avatar is refused on load.
pub struct TomlLedgerRepository {
    fs: LocalFs,
}

impl TomlLedgerRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TomlLedgerRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML representation of the installed handles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlArtifacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter: Option<ArtifactId>,
    #[serde(default)]
    clips: Vec<ArtifactId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    menu: Option<ArtifactId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    layer: Option<ArtifactId>,
}

/// TOML representation of the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLedger {
    version: u32,
    avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,
    #[serde(default)]
    item_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    artifacts: TomlArtifacts,
}

impl TomlLedgerRepository {
    fn parse(content: &str, path: &Path) -> WardrobeResult<Ledger> {
        let toml_ledger: TomlLedger = toml::from_str(content).map_err(|e| WardrobeError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if toml_ledger.version != Ledger::VERSION {
            return Err(WardrobeError::VersionMismatch {
                file: path.to_path_buf(),
                found: toml_ledger.version,
                expected: Ledger::VERSION,
            });
        }

        let artifacts = GeneratedArtifacts {
            parameter: toml_ledger.artifacts.parameter,
            clips: toml_ledger.artifacts.clips,
            menu: toml_ledger.artifacts.menu,
            layer: toml_ledger.artifacts.layer,
        };

        Ok(Ledger::with_parts(
            toml_ledger.avatar,
            artifacts,
            toml_ledger.fingerprint.as_deref().map(ContentHash::new),
            toml_ledger.item_count,
            toml_ledger.generated_at,
        ))
    }
}

impl LedgerRepository for TomlLedgerRepository {
    fn load_or_new(&self, path: &Path, avatar: &str) -> WardrobeResult<Ledger> {
        if !self.fs.exists(path) {
            return Ok(Ledger::new(avatar));
        }
        let content = self.fs.read(path)?;
        let ledger = Self::parse(&content, path)?;
        if ledger.avatar() != avatar {
            return Err(WardrobeError::AvatarMismatch {
                file: path.to_path_buf(),
                found: ledger.avatar().to_string(),
                expected: avatar.to_string(),
            });
        }
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger, path: &Path) -> WardrobeResult<()> {
        let artifacts = ledger.artifacts();
        let toml_ledger = TomlLedger {
            version: ledger.version(),
            avatar: ledger.avatar().to_string(),
            fingerprint: ledger.fingerprint().map(|h| h.to_string()),
            item_count: ledger.item_count(),
            generated_at: ledger.generated_at(),
            artifacts: TomlArtifacts {
                parameter: artifacts.parameter,
                clips: artifacts.clips.clone(),
                menu: artifacts.menu,
                layer: artifacts.layer,
            },
        };

        let content = toml::to_string_pretty(&toml_ledger).map_err(|e| WardrobeError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs.write(path, &content)?;
        Ok(())
    }

    fn delete(&self, path: &Path) -> WardrobeResult<()> {
        if self.fs.exists(path) {
            self.fs.remove(path)?;
        }
        Ok(())
    }
}
