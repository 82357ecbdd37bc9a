//! Update result types

use crate::application::clean::Removal;
use crate::domain::entities::{BuildResult, GeneratedArtifacts, Ledger};

/// Result of an update operation
#[derive(Debug, Clone)]
pub struct UpdateResult {
    /// The system that was (or would be) installed
    pub build: BuildResult,
    /// Previous install that was taken down
    pub removal: Removal,
    /// Handles for the new install; empty for a dry run or empty selection
    pub installed: GeneratedArtifacts,
    /// Ledger to persist after the scene has been saved
    pub ledger: Ledger,
    pub dry_run: bool,
}

impl UpdateResult {
    pub fn item_count(&self) -> usize {
        self.build.item_count()
    }

    /// True when nothing was installed because the selection is empty
    pub fn is_cleanup_only(&self) -> bool {
        self.build.item_count() == 0
    }
}
