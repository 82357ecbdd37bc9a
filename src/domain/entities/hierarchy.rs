//! Hierarchy entity - the scene graph items are picked from
//!
//! An arena of named nodes. Every node has at most one parent; nodes without a
//! parent are scene roots. Children keep insertion order, which is also the
//! order name lookups search in.

use crate::domain::value_objects::ObjectPath;
use crate::error::{WardrobeError, WardrobeResult};

/// Index of a node inside one [`Hierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Scene graph of named objects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a top-level object
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.push(name.into(), None);
        self.roots.push(id);
        id
    }

    /// Add an object under `parent`
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> WardrobeResult<NodeId> {
        if parent.0 >= self.nodes.len() {
            return Err(WardrobeError::UnknownNode(parent));
        }
        let id = self.push(name.into(), Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, name: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> WardrobeResult<&Node> {
        self.nodes.get(id.0).ok_or(WardrobeError::UnknownNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// First top-level object with this name
    pub fn find_root(&self, name: &str) -> Option<NodeId> {
        self.roots
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].name == name)
    }

    /// Walk `path` down from `from`, taking the first child matching each segment.
    ///
    /// An empty path resolves to `from` itself.
    pub fn find(&self, from: NodeId, path: &ObjectPath) -> Option<NodeId> {
        let mut current = from;
        for segment in path.segments() {
            current = self
                .children(current)
                .iter()
                .copied()
                .find(|child| self.nodes[child.0].name == *segment)?;
        }
        Some(current)
    }

    /// Resolve a scene-absolute path (first segment names a root).
    pub fn find_absolute(&self, path: &ObjectPath) -> Option<NodeId> {
        let (root_name, rest) = path.strip_first()?;
        let root = self.find_root(root_name)?;
        self.find(root, &rest)
    }

    /// True when `node` sits strictly below `root`.
    pub fn is_descendant_of(&self, node: NodeId, root: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Names from `root` (exclusive) down to `node` (inclusive).
    ///
    /// Fails with `NotDescendant` when walking up from `node` never reaches `root`.
    pub fn relative_path(&self, node: NodeId, root: NodeId) -> WardrobeResult<ObjectPath> {
        let target = self.node(node)?;
        let root_name = &self.node(root)?.name;

        let mut names = vec![target.name.clone()];
        let mut current = target.parent;
        loop {
            match current {
                Some(id) if id == root => break,
                Some(id) => {
                    let parent = self.node(id)?;
                    names.push(parent.name.clone());
                    current = parent.parent;
                }
                None => {
                    return Err(WardrobeError::NotDescendant {
                        name: target.name.clone(),
                        root: root_name.clone(),
                    })
                }
            }
        }

        names.reverse();
        Ok(ObjectPath::new(names))
    }
}
