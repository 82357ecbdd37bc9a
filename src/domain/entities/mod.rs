//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Hierarchy` - the scene graph items are picked from
//! - `Selection` - ordered working set of items
//! - `BuildResult` and friends - what a build produces
//! - `Ledger` - tracks installed artifacts by handle

mod artifacts;
mod hierarchy;
mod ledger;
mod selection;

pub use artifacts::{
    BuildResult, Clip, Condition, ConditionMode, ControlParameter, ControlType, Curve, Keyframe,
    MenuEntrySpec, MenuSpec, StateMachineSpec, StateSpec, TransitionSpec, VisibilityTrack,
    ACTIVE_PROPERTY,
};
pub use hierarchy::{Hierarchy, NodeId};
pub use ledger::{GeneratedArtifacts, Ledger};
pub use selection::{Item, Selection};
