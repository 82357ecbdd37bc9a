//! Clean Use Case
//!
//! Removes ledger-recorded artifacts from the avatar stores.

use tracing::{info, warn};

use crate::domain::entities::{GeneratedArtifacts, Ledger};
use crate::domain::ports::AvatarScene;
use crate::error::WardrobeResult;

use super::options::CleanOptions;
use super::result::{ArtifactRef, CleanResult, Removal};

/// Clean use case - removes generated content tracked in the ledger
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanUseCase;

impl CleanUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Remove every recorded artifact and return the cleared ledger.
    ///
    /// The caller persists the scene first, then the ledger.
    pub fn execute<S: AvatarScene>(
        &self,
        scene: &mut S,
        ledger: &Ledger,
        options: &CleanOptions,
    ) -> WardrobeResult<CleanResult> {
        let removal = remove_recorded(scene, ledger.artifacts(), options.dry_run)?;

        let mut next = ledger.clone();
        if !options.dry_run {
            next.clear();
        }

        Ok(CleanResult {
            removal,
            ledger: next,
            dry_run: options.dry_run,
        })
    }
}

/// Remove `artifacts` by handle. Handles that no longer resolve are reported,
/// not treated as errors.
pub(crate) fn remove_recorded<S: AvatarScene + ?Sized>(
    scene: &mut S,
    artifacts: &GeneratedArtifacts,
    dry_run: bool,
) -> WardrobeResult<Removal> {
    let mut removal = Removal::default();

    for (kind, id) in artifacts.entries() {
        let artifact = ArtifactRef::new(kind, id);
        let present = if dry_run {
            scene.resolves(kind, id)
        } else {
            scene.remove_artifact(kind, id)?
        };

        if present {
            if !dry_run {
                info!(kind = kind.as_str(), %id, "removed generated artifact");
            }
            removal.removed.push(artifact);
        } else {
            warn!(kind = kind.as_str(), %id, "recorded artifact no longer exists");
            removal.missing.push(artifact);
        }
    }

    Ok(removal)
}
