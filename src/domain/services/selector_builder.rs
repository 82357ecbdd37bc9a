//! Exclusive selector builder
//!
//! Turns an ordered selection into a control parameter, per-item visibility
//! tracks, one clip per item state, a star-topology state machine and a menu.
//! Pure: no I/O, no store access, deterministic for a given selection.

use tracing::debug;

use crate::domain::entities::{
    BuildResult, Clip, Condition, ConditionMode, ControlParameter, ControlType, Hierarchy,
    MenuEntrySpec, MenuSpec, NodeId, Selection, StateMachineSpec, StateSpec, TransitionSpec,
    VisibilityTrack, ACTIVE_PROPERTY,
};
use crate::domain::value_objects::ObjectPath;
use crate::error::{WardrobeError, WardrobeResult};

/// Name of the state that represents "nothing selected"
pub const DEFAULT_STATE: &str = "Default";

/// Editor graph placement of generated states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateLayout {
    pub x: f32,
    pub row_height: f32,
}

impl Default for StateLayout {
    fn default() -> Self {
        Self {
            x: 300.0,
            row_height: 100.0,
        }
    }
}

impl StateLayout {
    /// Default state sits in row 1, item `value` in row `value + 1`.
    fn position(&self, value: i32) -> [f32; 2] {
        [self.x, self.row_height * (value as f32 + 1.0)]
    }
}

/// Names and knobs for generated content
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSettings {
    pub parameter_name: String,
    pub layer_name: String,
    pub menu_name: String,
    pub clip_prefix: String,
    pub saved: bool,
    pub default_weight: f32,
    pub layout: StateLayout,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            parameter_name: "Wardrobe".to_string(),
            layer_name: "Wardrobe".to_string(),
            menu_name: "Wardrobe".to_string(),
            clip_prefix: "Wardrobe_".to_string(),
            saved: true,
            default_weight: 1.0,
            layout: StateLayout::default(),
        }
    }
}

/// Builds the mutually-exclusive selector for a selection
#[derive(Debug, Clone, Default)]
pub struct ExclusiveSelectorBuilder {
    settings: BuilderSettings,
}

impl ExclusiveSelectorBuilder {
    pub fn new(settings: BuilderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Path from `root` (exclusive) to `node` (inclusive).
    pub fn relative_path(
        hierarchy: &Hierarchy,
        node: NodeId,
        root: NodeId,
    ) -> WardrobeResult<ObjectPath> {
        hierarchy.relative_path(node, root)
    }

    /// Build the full system. Every path is resolved before anything is
    /// assembled, so an error leaves no partial result behind.
    pub fn build(
        &self,
        selection: &Selection,
        hierarchy: &Hierarchy,
        root: NodeId,
    ) -> WardrobeResult<BuildResult> {
        let count = i32::try_from(selection.len())
            .ok()
            .filter(|n| *n < i32::MAX)
            .ok_or(WardrobeError::TooManyItems {
                count: selection.len(),
            })?;

        let tracks = selection
            .values()
            .map(|(value, item)| {
                Ok(VisibilityTrack {
                    value: value as i32,
                    item: item.name().to_string(),
                    target: hierarchy.relative_path(item.node(), root)?,
                    property: ACTIVE_PROPERTY.to_string(),
                })
            })
            .collect::<WardrobeResult<Vec<_>>>()?;

        let parameter = ControlParameter {
            name: self.settings.parameter_name.clone(),
            min: 0,
            max: count,
            default: 0,
            saved: self.settings.saved,
        };

        let clips: Vec<Clip> = tracks
            .iter()
            .map(|track| Clip {
                name: self.state_name(track.value),
                curves: tracks.iter().map(|t| t.sample(track.value)).collect(),
            })
            .collect();

        let state_machine = self.state_machine(&tracks);
        let menu = self.menu(&tracks);

        debug!(
            items = tracks.len(),
            states = state_machine.states.len(),
            transitions = state_machine.transitions.len(),
            "built exclusive selector"
        );

        Ok(BuildResult {
            parameter,
            tracks,
            clips,
            state_machine,
            menu,
        })
    }

    fn state_name(&self, value: i32) -> String {
        format!("{}{}", self.settings.clip_prefix, value)
    }

    fn state_machine(&self, tracks: &[VisibilityTrack]) -> StateMachineSpec {
        let layout = self.settings.layout;
        let mut states = vec![StateSpec {
            name: DEFAULT_STATE.to_string(),
            value: None,
            motion: None,
            position: layout.position(0),
        }];
        let mut transitions = Vec::with_capacity(tracks.len() * 2);

        for track in tracks {
            let index = states.len();
            let name = self.state_name(track.value);
            states.push(StateSpec {
                name: name.clone(),
                value: Some(track.value),
                motion: Some(name),
                position: layout.position(track.value),
            });
            transitions.push(self.transition(0, index, ConditionMode::Equals, track.value));
            transitions.push(self.transition(index, 0, ConditionMode::NotEqual, track.value));
        }

        StateMachineSpec {
            layer_name: self.settings.layer_name.clone(),
            parameter: self.settings.parameter_name.clone(),
            default_weight: self.settings.default_weight,
            default_state: 0,
            states,
            transitions,
        }
    }

    fn transition(&self, from: usize, to: usize, mode: ConditionMode, value: i32) -> TransitionSpec {
        TransitionSpec {
            from,
            to,
            conditions: vec![Condition {
                mode,
                parameter: self.settings.parameter_name.clone(),
                threshold: value,
            }],
            has_exit_time: false,
            duration: 0.0,
        }
    }

    fn menu(&self, tracks: &[VisibilityTrack]) -> MenuSpec {
        MenuSpec {
            name: self.settings.menu_name.clone(),
            entries: tracks
                .iter()
                .map(|track| MenuEntrySpec {
                    label: track.item.clone(),
                    control: ControlType::Toggle,
                    parameter: self.settings.parameter_name.clone(),
                    value: track.value,
                })
                .collect(),
        }
    }
}
