//! Clean result types

use std::fmt;

use crate::domain::entities::Ledger;
use crate::domain::value_objects::{ArtifactId, ArtifactKind};

/// A recorded handle together with the store it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactRef {
    pub kind: ArtifactKind,
    pub id: ArtifactId,
}

impl ArtifactRef {
    pub fn new(kind: ArtifactKind, id: ArtifactId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Outcome of removing recorded handles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Removed (or, in a dry run, would be removed)
    pub removed: Vec<ArtifactRef>,
    /// Recorded but no longer present in the scene
    pub missing: Vec<ArtifactRef>,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.missing.is_empty()
    }
}

/// Result of a clean operation
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub removal: Removal,
    /// Ledger to persist; cleared unless this was a dry run
    pub ledger: Ledger,
    pub dry_run: bool,
}

impl CleanResult {
    pub fn removed_count(&self) -> usize {
        self.removal.removed.len()
    }

    /// Check if there was anything to do
    pub fn has_changes(&self) -> bool {
        !self.removal.is_empty()
    }
}
