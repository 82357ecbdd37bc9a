//! TOML Scene Repository
//!
//! Stores a `SceneDocument` as TOML: the object tree as nested `objects`
//! tables, followed by the host content arrays.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Hierarchy, NodeId};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::{AvatarScene, SceneRepository};
use crate::error::{WardrobeError, WardrobeResult};
use crate::infrastructure::avatar::{
    SceneContent, SceneDocument, StoredClip, StoredLayer, StoredMenu, StoredParameter,
};
use crate::infrastructure::fs::LocalFs;

/// Current scene file format version
pub const SCENE_VERSION: u32 = 1;

/// TOML-based scene repository
pub struct TomlSceneRepository {
    fs: LocalFs,
}

impl TomlSceneRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TomlSceneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeFile {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneFile {
    version: u32,
    avatar: String,
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    objects: Vec<NodeFile>,
    #[serde(default)]
    parameters: Vec<StoredParameter>,
    #[serde(default)]
    clips: Vec<StoredClip>,
    #[serde(default)]
    layers: Vec<StoredLayer>,
    #[serde(default)]
    menus: Vec<StoredMenu>,
}

fn first_id() -> u64 {
    1
}

fn add_subtree(hierarchy: &mut Hierarchy, parent: NodeId, node: NodeFile) -> WardrobeResult<()> {
    let id = hierarchy.add_child(parent, node.name)?;
    for child in node.children {
        add_subtree(hierarchy, id, child)?;
    }
    Ok(())
}

fn to_node_file(hierarchy: &Hierarchy, id: NodeId) -> NodeFile {
    NodeFile {
        name: hierarchy.name(id).unwrap_or_default().to_string(),
        children: hierarchy
            .children(id)
            .iter()
            .map(|child| to_node_file(hierarchy, *child))
            .collect(),
    }
}

/// Parse scene TOML. `path` is only used for error messages.
pub fn parse_scene(content: &str, path: &Path) -> WardrobeResult<SceneDocument> {
    let file: SceneFile = toml::from_str(content).map_err(|e| WardrobeError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if file.version != SCENE_VERSION {
        return Err(WardrobeError::VersionMismatch {
            file: path.to_path_buf(),
            found: file.version,
            expected: SCENE_VERSION,
        });
    }

    let mut hierarchy = Hierarchy::new();
    for root in file.objects {
        let id = hierarchy.add_root(root.name);
        for child in root.children {
            add_subtree(&mut hierarchy, id, child)?;
        }
    }

    let avatar_root = hierarchy
        .find_root(&file.avatar)
        .ok_or_else(|| WardrobeError::ObjectNotFound {
            path: file.avatar.clone(),
        })?;

    let content = SceneContent {
        parameters: file.parameters,
        clips: file.clips,
        layers: file.layers,
        menus: file.menus,
    };

    SceneDocument::with_content(hierarchy, avatar_root, content, file.next_id)
}

/// Render scene TOML
pub fn render_scene(scene: &SceneDocument, path: &Path) -> WardrobeResult<String> {
    let hierarchy = scene.hierarchy();
    let content = scene.content().clone();
    let file = SceneFile {
        version: SCENE_VERSION,
        avatar: scene.avatar().to_string(),
        next_id: scene.next_id(),
        objects: hierarchy
            .roots()
            .iter()
            .map(|root| to_node_file(hierarchy, *root))
            .collect(),
        parameters: content.parameters,
        clips: content.clips,
        layers: content.layers,
        menus: content.menus,
    };

    toml::to_string_pretty(&file).map_err(|e| WardrobeError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl SceneRepository for TomlSceneRepository {
    type Scene = SceneDocument;

    fn load(&self, path: &Path) -> WardrobeResult<SceneDocument> {
        let content = self.fs.read(path)?;
        parse_scene(&content, path)
    }

    fn save(&self, scene: &SceneDocument, path: &Path) -> WardrobeResult<()> {
        let content = render_scene(scene, path)?;
        self.fs.write(path, &content)?;
        Ok(())
    }
}
