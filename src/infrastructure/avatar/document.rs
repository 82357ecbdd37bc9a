//! Scene document - an in-memory host avatar
//!
//! Holds the object hierarchy plus the host-side content the stores manage:
//! expression parameters, clips, animator layers and sub-menus. Content may be
//! generated (tracked by handle in a ledger) or user-authored; the document
//! does not distinguish the two, it only refuses name collisions.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::{Clip, ControlParameter, Hierarchy, MenuSpec, NodeId, StateMachineSpec};
use crate::domain::ports::{AnimationStore, AvatarScene, MenuStore, ParameterStore};
use crate::domain::value_objects::{ArtifactId, ArtifactKind};
use crate::error::{WardrobeError, WardrobeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredParameter {
    pub id: ArtifactId,
    pub parameter: ControlParameter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredClip {
    pub id: ArtifactId,
    pub clip: Clip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLayer {
    pub id: ArtifactId,
    pub machine: StateMachineSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMenu {
    pub id: ArtifactId,
    pub menu: MenuSpec,
}

/// Stored host content, split out so repositories can move it as one piece
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneContent {
    #[serde(default)]
    pub parameters: Vec<StoredParameter>,
    #[serde(default)]
    pub clips: Vec<StoredClip>,
    #[serde(default)]
    pub layers: Vec<StoredLayer>,
    #[serde(default)]
    pub menus: Vec<StoredMenu>,
}

impl SceneContent {
    fn max_id(&self) -> u64 {
        self.parameters
            .iter()
            .map(|p| p.id)
            .chain(self.clips.iter().map(|c| c.id))
            .chain(self.layers.iter().map(|l| l.id))
            .chain(self.menus.iter().map(|m| m.id))
            .map(ArtifactId::get)
            .max()
            .unwrap_or(0)
    }
}

/// Host avatar held in memory
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument {
    hierarchy: Hierarchy,
    avatar_root: NodeId,
    content: SceneContent,
    next_id: u64,
}

impl SceneDocument {
    /// Empty scene around an existing hierarchy
    pub fn new(hierarchy: Hierarchy, avatar_root: NodeId) -> WardrobeResult<Self> {
        Self::with_content(hierarchy, avatar_root, SceneContent::default(), 1)
    }

    /// Rebuild from persisted parts. `next_id` is raised past every stored id
    /// so handles are never reused.
    pub fn with_content(
        hierarchy: Hierarchy,
        avatar_root: NodeId,
        content: SceneContent,
        next_id: u64,
    ) -> WardrobeResult<Self> {
        if !hierarchy.contains(avatar_root) {
            return Err(WardrobeError::UnknownNode(avatar_root));
        }
        let next_id = next_id.max(content.max_id() + 1);
        Ok(Self {
            hierarchy,
            avatar_root,
            content,
            next_id,
        })
    }

    pub fn avatar(&self) -> &str {
        self.hierarchy.name(self.avatar_root).unwrap_or_default()
    }

    pub fn content(&self) -> &SceneContent {
        &self.content
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn parameter_named(&self, name: &str) -> Option<&StoredParameter> {
        self.content
            .parameters
            .iter()
            .find(|p| p.parameter.name == name)
    }

    pub fn layer_named(&self, name: &str) -> Option<&StoredLayer> {
        self.content
            .layers
            .iter()
            .find(|l| l.machine.layer_name == name)
    }

    pub fn menu_named(&self, name: &str) -> Option<&StoredMenu> {
        self.content.menus.iter().find(|m| m.menu.name == name)
    }

    fn allocate(&mut self) -> ArtifactId {
        let id = ArtifactId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Remove the element with `id`, reporting whether one existed.
fn remove_by_id<T>(items: &mut Vec<T>, id: ArtifactId, id_of: impl Fn(&T) -> ArtifactId) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

impl ParameterStore for SceneDocument {
    fn add_parameter(&mut self, parameter: &ControlParameter) -> WardrobeResult<ArtifactId> {
        if self.parameter_named(&parameter.name).is_some() {
            return Err(WardrobeError::ParameterConflict {
                name: parameter.name.clone(),
            });
        }
        let id = self.allocate();
        self.content.parameters.push(StoredParameter {
            id,
            parameter: parameter.clone(),
        });
        info!(%id, name = %parameter.name, "added parameter");
        Ok(id)
    }

    fn remove_parameter(&mut self, id: ArtifactId) -> WardrobeResult<bool> {
        Ok(remove_by_id(&mut self.content.parameters, id, |p| p.id))
    }
}

impl AnimationStore for SceneDocument {
    fn add_clip(&mut self, clip: &Clip) -> WardrobeResult<ArtifactId> {
        let id = self.allocate();
        self.content.clips.push(StoredClip {
            id,
            clip: clip.clone(),
        });
        Ok(id)
    }

    fn remove_clip(&mut self, id: ArtifactId) -> WardrobeResult<bool> {
        Ok(remove_by_id(&mut self.content.clips, id, |c| c.id))
    }

    fn add_layer(&mut self, machine: &StateMachineSpec) -> WardrobeResult<ArtifactId> {
        if self.layer_named(&machine.layer_name).is_some() {
            return Err(WardrobeError::LayerConflict {
                name: machine.layer_name.clone(),
            });
        }
        let id = self.allocate();
        self.content.layers.push(StoredLayer {
            id,
            machine: machine.clone(),
        });
        info!(%id, name = %machine.layer_name, states = machine.states.len(), "added layer");
        Ok(id)
    }

    fn remove_layer(&mut self, id: ArtifactId) -> WardrobeResult<bool> {
        Ok(remove_by_id(&mut self.content.layers, id, |l| l.id))
    }
}

impl MenuStore for SceneDocument {
    fn add_sub_menu(&mut self, menu: &MenuSpec) -> WardrobeResult<ArtifactId> {
        if self.menu_named(&menu.name).is_some() {
            return Err(WardrobeError::MenuConflict {
                name: menu.name.clone(),
            });
        }
        let id = self.allocate();
        self.content.menus.push(StoredMenu {
            id,
            menu: menu.clone(),
        });
        info!(%id, name = %menu.name, entries = menu.entries.len(), "added sub-menu");
        Ok(id)
    }

    fn remove_sub_menu(&mut self, id: ArtifactId) -> WardrobeResult<bool> {
        Ok(remove_by_id(&mut self.content.menus, id, |m| m.id))
    }
}

impl AvatarScene for SceneDocument {
    fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    fn avatar_root(&self) -> NodeId {
        self.avatar_root
    }

    fn resolves(&self, kind: ArtifactKind, id: ArtifactId) -> bool {
        match kind {
            ArtifactKind::Parameter => self.content.parameters.iter().any(|p| p.id == id),
            ArtifactKind::Clip => self.content.clips.iter().any(|c| c.id == id),
            ArtifactKind::Layer => self.content.layers.iter().any(|l| l.id == id),
            ArtifactKind::Menu => self.content.menus.iter().any(|m| m.id == id),
        }
    }
}
