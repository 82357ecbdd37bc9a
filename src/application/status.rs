//! Status query
//!
//! Read-only summary of how the saved selection, the ledger and the scene
//! relate to each other.

use crate::application::clean::ArtifactRef;
use crate::domain::entities::Ledger;
use crate::domain::ports::AvatarScene;
use crate::domain::services::ExclusiveSelectorBuilder;
use crate::domain::value_objects::{ContentHash, ObjectPath};
use crate::error::WardrobeResult;

use super::selection::LoadedSelection;

/// Whether the installed system matches the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Installed system was built from an identical selection
    UpToDate,
    /// Something is installed but the selection changed since
    Stale,
    /// Nothing installed while the selection is non-empty
    NotInstalled,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::UpToDate => "up to date",
            Freshness::Stale => "stale",
            Freshness::NotInstalled => "not installed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub avatar: String,
    pub item_count: usize,
    pub missing: Vec<ObjectPath>,
    /// The ledger records an install
    pub installed: bool,
    /// Recorded handles that no longer resolve in the scene
    pub dangling: Vec<ArtifactRef>,
    pub fingerprint: ContentHash,
    pub freshness: Freshness,
}

impl StatusReport {
    pub fn handles_resolve(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Status query - compares the current build against the ledger
#[derive(Debug, Clone, Default)]
pub struct StatusQuery {
    builder: ExclusiveSelectorBuilder,
}

impl StatusQuery {
    pub fn new(builder: ExclusiveSelectorBuilder) -> Self {
        Self { builder }
    }

    pub fn execute<S: AvatarScene>(
        &self,
        scene: &S,
        loaded: &LoadedSelection,
        ledger: &Ledger,
    ) -> WardrobeResult<StatusReport> {
        let build = self
            .builder
            .build(&loaded.selection, scene.hierarchy(), scene.avatar_root())?;
        let fingerprint = build.fingerprint();

        let dangling = ledger
            .artifacts()
            .entries()
            .filter(|(kind, id)| !scene.resolves(*kind, *id))
            .map(|(kind, id)| ArtifactRef::new(kind, id))
            .collect();

        let freshness = match ledger.fingerprint() {
            Some(recorded) if *recorded == fingerprint => Freshness::UpToDate,
            Some(_) => Freshness::Stale,
            None if loaded.selection.is_empty() => Freshness::UpToDate,
            None => Freshness::NotInstalled,
        };

        Ok(StatusReport {
            avatar: ledger.avatar().to_string(),
            item_count: loaded.selection.len(),
            missing: loaded.missing.clone(),
            installed: !ledger.is_empty(),
            dangling,
            fingerprint,
            freshness,
        })
    }
}
