//! Selection Use Case
//!
//! Keeps the working set in step with its persisted form:
//! - loading resolves saved paths against the current hierarchy
//! - adding validates scene paths and reports what was rejected
//! - saving writes paths relative to the avatar root
//! - importing accepts the legacy `;`-joined string

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::entities::{Hierarchy, Item, NodeId, Selection};
use crate::domain::ports::{PersistedSelection, SelectionRepository};
use crate::domain::value_objects::ObjectPath;
use crate::error::{WardrobeError, WardrobeResult};

/// A selection rebuilt from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSelection {
    pub selection: Selection,
    /// Saved paths that no longer resolve under the avatar root
    pub missing: Vec<ObjectPath>,
    /// Saved paths resolving to an item already in the selection
    pub duplicates: Vec<ObjectPath>,
}

/// A path the selection refused, as the caller gave it
#[derive(Debug)]
pub struct RejectedPath {
    pub path: String,
    pub error: WardrobeError,
}

/// Outcome of adding several paths
#[derive(Debug, Default)]
pub struct AddResult {
    pub added: Vec<Item>,
    pub rejected: Vec<RejectedPath>,
}

impl AddResult {
    pub fn is_success(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Rebuild a selection from persisted relative paths.
///
/// Each path is resolved from `root` taking the first child matching each
/// segment; unresolvable paths and repeats are dropped and reported.
pub fn resolve_persisted(
    persisted: &PersistedSelection,
    hierarchy: &Hierarchy,
    root: NodeId,
) -> LoadedSelection {
    let mut loaded = LoadedSelection::default();

    for path in &persisted.items {
        let Some(node) = hierarchy.find(root, path) else {
            warn!(path = %path, "saved item not found, skipping");
            loaded.missing.push(path.clone());
            continue;
        };

        let item = match Item::from_node(hierarchy, node) {
            Ok(item) => item,
            Err(_) => {
                loaded.missing.push(path.clone());
                continue;
            }
        };

        match loaded.selection.validate_and_add(item, hierarchy, root) {
            Ok(()) => {}
            Err(WardrobeError::DuplicateItem { .. }) => {
                warn!(path = %path, "saved item listed twice, skipping");
                loaded.duplicates.push(path.clone());
            }
            Err(err) => {
                warn!(path = %path, error = %err, "saved item is not usable, skipping");
                loaded.missing.push(path.clone());
            }
        }
    }

    debug!(
        items = loaded.selection.len(),
        missing = loaded.missing.len(),
        "resolved saved selection"
    );
    loaded
}

/// Append scene-absolute paths in order, keeping the valid ones.
pub fn add_paths(
    selection: &mut Selection,
    hierarchy: &Hierarchy,
    root: NodeId,
    paths: &[ObjectPath],
) -> AddResult {
    let mut result = AddResult::default();
    for path in paths {
        let outcome = hierarchy
            .find_absolute(path)
            .ok_or_else(|| WardrobeError::ObjectNotFound {
                path: path.to_string(),
            })
            .and_then(|node| Item::from_node(hierarchy, node))
            .and_then(|item| {
                selection.validate_and_add(item.clone(), hierarchy, root)?;
                Ok(item)
            });
        record(&mut result, path, outcome);
    }
    result
}

/// Append paths relative to `root`, as written by older versions.
pub fn add_relative_paths(
    selection: &mut Selection,
    hierarchy: &Hierarchy,
    root: NodeId,
    paths: &[ObjectPath],
) -> AddResult {
    let mut result = AddResult::default();
    for path in paths {
        let outcome = hierarchy
            .find(root, path)
            .filter(|node| *node != root)
            .ok_or_else(|| WardrobeError::ObjectNotFound {
                path: path.to_string(),
            })
            .and_then(|node| Item::from_node(hierarchy, node))
            .and_then(|item| {
                selection.validate_and_add(item.clone(), hierarchy, root)?;
                Ok(item)
            });
        record(&mut result, path, outcome);
    }
    result
}

fn record(result: &mut AddResult, path: &ObjectPath, outcome: WardrobeResult<Item>) {
    match outcome {
        Ok(item) => result.added.push(item),
        Err(error) => result.rejected.push(RejectedPath {
            path: path.to_string(),
            error,
        }),
    }
}

/// Selection use case - loads and saves the working set through a repository
pub struct SelectionUseCase<SR>
where
    SR: SelectionRepository,
{
    repo: SR,
}

impl<SR> SelectionUseCase<SR>
where
    SR: SelectionRepository,
{
    pub fn new(repo: SR) -> Self {
        Self { repo }
    }

    /// Load the saved selection; nothing saved yet means an empty one.
    pub fn load(
        &self,
        path: &Path,
        hierarchy: &Hierarchy,
        root: NodeId,
    ) -> WardrobeResult<LoadedSelection> {
        let Some(persisted) = self.repo.load(path)? else {
            return Ok(LoadedSelection::default());
        };
        let avatar = hierarchy.name(root).ok_or(WardrobeError::UnknownNode(root))?;
        if persisted.avatar != avatar {
            return Err(WardrobeError::AvatarMismatch {
                file: path.to_path_buf(),
                found: persisted.avatar,
                expected: avatar.to_string(),
            });
        }
        Ok(resolve_persisted(&persisted, hierarchy, root))
    }

    /// Save `selection` as paths relative to `root`.
    pub fn save(
        &self,
        path: &Path,
        selection: &Selection,
        hierarchy: &Hierarchy,
        root: NodeId,
    ) -> WardrobeResult<()> {
        let items = selection
            .iter()
            .map(|item| hierarchy.relative_path(item.node(), root))
            .collect::<WardrobeResult<Vec<_>>>()?;
        let avatar = hierarchy.name(root).ok_or(WardrobeError::UnknownNode(root))?;
        self.repo.save(&PersistedSelection::new(avatar, items), path)
    }

    /// Add items from a legacy `;`-joined string of unescaped relative paths.
    ///
    /// Malformed entries are rejected individually; the rest are still added.
    pub fn import_legacy(
        &self,
        selection: &mut Selection,
        hierarchy: &Hierarchy,
        root: NodeId,
        legacy: &str,
    ) -> AddResult {
        let avatar = hierarchy.name(root).unwrap_or_default();
        let (persisted, malformed) = PersistedSelection::parse_legacy(avatar, legacy);
        let mut result = add_relative_paths(selection, hierarchy, root, &persisted.items);
        for (entry, error) in malformed {
            warn!(entry = %entry, error = %error, "legacy entry is malformed, skipping");
            result.rejected.push(RejectedPath { path: entry, error });
        }
        result
    }
}
