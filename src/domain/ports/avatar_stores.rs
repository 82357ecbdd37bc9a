//! Avatar store ports - the host collaborators a build is installed into
//!
//! Every `add_*` returns a handle; removal takes that handle back. Stores
//! never look content up by name on our behalf, so user content that happens
//! to share a reserved name is safe.

use crate::domain::entities::{Clip, ControlParameter, Hierarchy, MenuSpec, NodeId, StateMachineSpec};
use crate::domain::value_objects::{ArtifactId, ArtifactKind};
use crate::error::WardrobeResult;

/// Expression parameter namespace
pub trait ParameterStore {
    /// Fails with `ParameterConflict` if the name is already taken.
    fn add_parameter(&mut self, parameter: &ControlParameter) -> WardrobeResult<ArtifactId>;

    /// Returns `false` when the handle no longer resolves.
    fn remove_parameter(&mut self, id: ArtifactId) -> WardrobeResult<bool>;
}

/// Clips and animator layers
pub trait AnimationStore {
    fn add_clip(&mut self, clip: &Clip) -> WardrobeResult<ArtifactId>;

    fn remove_clip(&mut self, id: ArtifactId) -> WardrobeResult<bool>;

    /// Fails with `LayerConflict` if a layer with the same name exists.
    fn add_layer(&mut self, machine: &StateMachineSpec) -> WardrobeResult<ArtifactId>;

    fn remove_layer(&mut self, id: ArtifactId) -> WardrobeResult<bool>;
}

/// Expression menu
pub trait MenuStore {
    /// Fails with `MenuConflict` if a sub-menu with the same name exists.
    fn add_sub_menu(&mut self, menu: &MenuSpec) -> WardrobeResult<ArtifactId>;

    fn remove_sub_menu(&mut self, id: ArtifactId) -> WardrobeResult<bool>;
}

/// A host avatar: its object hierarchy plus the three stores.
pub trait AvatarScene: ParameterStore + AnimationStore + MenuStore {
    fn hierarchy(&self) -> &Hierarchy;

    fn avatar_root(&self) -> NodeId;

    /// Whether a handle of the given kind still resolves
    fn resolves(&self, kind: ArtifactKind, id: ArtifactId) -> bool;

    /// Remove any artifact by kind
    fn remove_artifact(&mut self, kind: ArtifactKind, id: ArtifactId) -> WardrobeResult<bool> {
        match kind {
            ArtifactKind::Parameter => self.remove_parameter(id),
            ArtifactKind::Clip => self.remove_clip(id),
            ArtifactKind::Layer => self.remove_layer(id),
            ArtifactKind::Menu => self.remove_sub_menu(id),
        }
    }
}
