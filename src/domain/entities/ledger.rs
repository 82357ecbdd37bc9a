//! Ledger entity - records what the last update installed
//!
//! Cleanup removes exactly the handles recorded here, so content that merely
//! shares a reserved name is never touched. It's a pure data structure - I/O
//! is handled by LedgerRepository.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ArtifactId, ArtifactKind, ContentHash};

/// Handles for everything one update installed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub parameter: Option<ArtifactId>,
    pub clips: Vec<ArtifactId>,
    pub menu: Option<ArtifactId>,
    pub layer: Option<ArtifactId>,
}

impl GeneratedArtifacts {
    pub fn is_empty(&self) -> bool {
        self.parameter.is_none() && self.clips.is_empty() && self.menu.is_none() && self.layer.is_none()
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Handles in removal order: layer first, parameter last.
    pub fn entries(&self) -> impl Iterator<Item = (ArtifactKind, ArtifactId)> + '_ {
        self.layer
            .map(|id| (ArtifactKind::Layer, id))
            .into_iter()
            .chain(self.menu.map(|id| (ArtifactKind::Menu, id)))
            .chain(self.clips.iter().map(|id| (ArtifactKind::Clip, *id)))
            .chain(self.parameter.map(|id| (ArtifactKind::Parameter, id)))
    }
}

/// Persisted record of the installed wardrobe system for one avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    version: u32,
    avatar: String,
    artifacts: GeneratedArtifacts,
    fingerprint: Option<ContentHash>,
    item_count: usize,
    generated_at: Option<DateTime<Utc>>,
}

impl Ledger {
    /// Current format version
    pub const VERSION: u32 = 1;

    pub fn new(avatar: impl Into<String>) -> Self {
        Self {
            version: Self::VERSION,
            avatar: avatar.into(),
            artifacts: GeneratedArtifacts::default(),
            fingerprint: None,
            item_count: 0,
            generated_at: None,
        }
    }

    /// Rebuild from persisted parts
    pub fn with_parts(
        avatar: impl Into<String>,
        artifacts: GeneratedArtifacts,
        fingerprint: Option<ContentHash>,
        item_count: usize,
        generated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            version: Self::VERSION,
            avatar: avatar.into(),
            artifacts,
            fingerprint,
            item_count,
            generated_at,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn artifacts(&self) -> &GeneratedArtifacts {
        &self.artifacts
    }

    pub fn fingerprint(&self) -> Option<&ContentHash> {
        self.fingerprint.as_ref()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// Nothing installed
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Record a fresh install, replacing whatever was recorded before
    pub fn record(
        &mut self,
        artifacts: GeneratedArtifacts,
        fingerprint: ContentHash,
        item_count: usize,
        at: DateTime<Utc>,
    ) {
        self.artifacts = artifacts;
        self.fingerprint = Some(fingerprint);
        self.item_count = item_count;
        self.generated_at = Some(at);
    }

    /// Forget everything (after cleanup)
    pub fn clear(&mut self) {
        self.artifacts = GeneratedArtifacts::default();
        self.fingerprint = None;
        self.item_count = 0;
        self.generated_at = None;
    }
}
