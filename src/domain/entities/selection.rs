//! Selection entity - the ordered working set of items
//!
//! Order is significant: the item at position `k` is driven by parameter value
//! `k + 1`. Values are never stored; they are recomputed from the current order
//! on every build.

use super::hierarchy::{Hierarchy, NodeId};
use crate::error::{WardrobeError, WardrobeResult};

/// A single selectable object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    node: NodeId,
}

impl Item {
    pub fn new(name: impl Into<String>, node: NodeId) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }

    /// Item for a node, named after it
    pub fn from_node(hierarchy: &Hierarchy, node: NodeId) -> WardrobeResult<Self> {
        let name = hierarchy
            .name(node)
            .ok_or(WardrobeError::UnknownNode(node))?;
        Ok(Self::new(name, node))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// Ordered, duplicate-free list of items under one root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Item>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items are identified by the node they reference, not by name.
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|i| i.node == item.node)
    }

    /// Append `candidate` after checking it is new and lives under `root`.
    ///
    /// A candidate whose binding path (relative to `root`) is already taken by
    /// another item is a duplicate too: same-named siblings would animate the
    /// same property. On error the selection is left unchanged.
    pub fn validate_and_add(
        &mut self,
        candidate: Item,
        hierarchy: &Hierarchy,
        root: NodeId,
    ) -> WardrobeResult<()> {
        if self.contains(&candidate) {
            return Err(WardrobeError::DuplicateItem {
                name: candidate.name,
            });
        }

        if !hierarchy.is_descendant_of(candidate.node, root) {
            return Err(WardrobeError::NotDescendant {
                name: candidate.name,
                root: hierarchy.name(root).unwrap_or_default().to_string(),
            });
        }

        let binding = hierarchy.relative_path(candidate.node, root)?.to_string();
        for item in &self.items {
            if hierarchy.relative_path(item.node, root)?.to_string() == binding {
                return Err(WardrobeError::DuplicateItem {
                    name: candidate.name,
                });
            }
        }

        self.items.push(candidate);
        Ok(())
    }

    /// Remove the item at `index` (0-based), keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> WardrobeResult<Item> {
        if index >= self.items.len() {
            return Err(WardrobeError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Items paired with the parameter value that selects them (1-based).
    pub fn values(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.items.iter().enumerate().map(|(k, item)| (k + 1, item))
    }
}
