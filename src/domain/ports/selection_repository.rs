//! SelectionRepository port - abstraction for working-set persistence
//!
//! Only paths are persisted: node ids are session-bound, so the application
//! layer resolves paths against the current hierarchy on load.

use std::path::Path;

use crate::domain::value_objects::ObjectPath;
use crate::error::{WardrobeError, WardrobeResult};

/// Persisted working set: item paths relative to the avatar root, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSelection {
    pub avatar: String,
    pub items: Vec<ObjectPath>,
}

impl PersistedSelection {
    /// Current format version
    pub const VERSION: u32 = 1;

    pub fn new(avatar: impl Into<String>, items: Vec<ObjectPath>) -> Self {
        Self {
            avatar: avatar.into(),
            items,
        }
    }

    /// Parse the legacy form: `;`-joined, unescaped relative paths.
    ///
    /// Entries are parsed one by one; malformed ones come back alongside the
    /// parsed selection, as written, instead of failing the rest.
    pub fn parse_legacy(
        avatar: impl Into<String>,
        joined: &str,
    ) -> (Self, Vec<(String, WardrobeError)>) {
        let mut items = Vec::new();
        let mut malformed = Vec::new();
        for entry in joined.split(';').filter(|s| !s.is_empty()) {
            match ObjectPath::parse_unescaped(entry) {
                Ok(path) => items.push(path),
                Err(err) => malformed.push((entry.to_string(), err)),
            }
        }
        (Self::new(avatar, items), malformed)
    }
}

/// Abstract repository for selection persistence
pub trait SelectionRepository {
    /// Load the selection at `path`; `None` when nothing was saved yet
    fn load(&self, path: &Path) -> WardrobeResult<Option<PersistedSelection>>;

    /// Save the selection to `path`
    fn save(&self, selection: &PersistedSelection, path: &Path) -> WardrobeResult<()>;
}
