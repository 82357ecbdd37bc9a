//! Build artifacts - the descriptions a build hands to the host stores
//!
//! Everything here is plain data. Stores decide how to materialize it.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ContentHash, ObjectPath};

/// Property a visibility track drives on its target
pub const ACTIVE_PROPERTY: &str = "m_IsActive";

/// Integer parameter that selects the active item (0 = none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlParameter {
    pub name: String,
    pub min: i32,
    pub max: i32,
    pub default: i32,
    /// Whether the host keeps the value across sessions
    pub saved: bool,
}

impl ControlParameter {
    pub fn domain(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

/// Per-item boolean signal: active exactly when the parameter equals `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityTrack {
    pub value: i32,
    pub item: String,
    pub target: ObjectPath,
    pub property: String,
}

impl VisibilityTrack {
    pub fn is_active(&self, parameter: i32) -> bool {
        parameter == self.value
    }

    /// The constant keyframe this track contributes to a clip played at `parameter`.
    pub fn sample(&self, parameter: i32) -> Curve {
        Curve {
            target: self.target.clone(),
            property: self.property.clone(),
            keyframes: vec![Keyframe {
                time: 0.0,
                value: if self.is_active(parameter) { 1.0 } else { 0.0 },
            }],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub target: ObjectPath,
    pub property: String,
    pub keyframes: Vec<Keyframe>,
}

/// Animation clip played while one item state is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    pub curves: Vec<Curve>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionMode {
    Equals,
    NotEqual,
}

/// Guard on an integer parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub mode: ConditionMode,
    pub parameter: String,
    pub threshold: i32,
}

impl Condition {
    pub fn holds(&self, value: i32) -> bool {
        match self.mode {
            ConditionMode::Equals => value == self.threshold,
            ConditionMode::NotEqual => value != self.threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    pub name: String,
    /// Parameter value this state represents; `None` for the default state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    /// Name of the clip played in this state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
    /// Editor graph position
    pub position: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Index into `StateMachineSpec::states`
    pub from: usize,
    pub to: usize,
    pub conditions: Vec<Condition>,
    pub has_exit_time: bool,
    pub duration: f32,
}

impl TransitionSpec {
    pub fn fires(&self, value: i32) -> bool {
        self.conditions.iter().all(|c| c.holds(value))
    }
}

/// Default-plus-N star topology; state 0 is the default state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMachineSpec {
    pub layer_name: String,
    pub parameter: String,
    pub default_weight: f32,
    pub default_state: usize,
    pub states: Vec<StateSpec>,
    pub transitions: Vec<TransitionSpec>,
}

impl StateMachineSpec {
    /// State reached after one evaluation from `state` with the parameter at `value`.
    pub fn step(&self, state: usize, value: i32) -> usize {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.fires(value))
            .map(|t| t.to)
            .unwrap_or(state)
    }

    /// Evaluate until no transition fires.
    pub fn settle(&self, state: usize, value: i32) -> usize {
        let mut current = state;
        for _ in 0..=self.states.len() {
            let next = self.step(current, value);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    pub fn state_named(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|s| s.name == name)
    }

    pub fn transitions_from(&self, state: usize) -> impl Iterator<Item = &TransitionSpec> {
        self.transitions.iter().filter(move |t| t.from == state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    Toggle,
}

/// Menu control that sets the parameter to a constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntrySpec {
    pub label: String,
    pub control: ControlType,
    pub parameter: String,
    pub value: i32,
}

/// Named sub-menu holding one entry per item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSpec {
    pub name: String,
    pub entries: Vec<MenuEntrySpec>,
}

/// Everything one build produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    pub parameter: ControlParameter,
    pub tracks: Vec<VisibilityTrack>,
    pub clips: Vec<Clip>,
    pub state_machine: StateMachineSpec,
    pub menu: MenuSpec,
}

impl BuildResult {
    pub fn item_count(&self) -> usize {
        self.tracks.len()
    }

    /// SHA-256 over the canonical JSON form; equal for equal builds.
    pub fn fingerprint(&self) -> ContentHash {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        ContentHash::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(mode: ConditionMode, threshold: i32) -> Condition {
        Condition {
            mode,
            parameter: "P".to_string(),
            threshold,
        }
    }

    #[test]
    fn condition_modes() {
        assert!(condition(ConditionMode::Equals, 2).holds(2));
        assert!(!condition(ConditionMode::Equals, 2).holds(3));
        assert!(condition(ConditionMode::NotEqual, 2).holds(0));
        assert!(!condition(ConditionMode::NotEqual, 2).holds(2));
    }

    #[test]
    fn track_samples_step_function() {
        let track = VisibilityTrack {
            value: 2,
            item: "Shirt".to_string(),
            target: ObjectPath::new(["Shirt"]),
            property: ACTIVE_PROPERTY.to_string(),
        };

        assert_eq!(track.sample(2).keyframes[0].value, 1.0);
        assert_eq!(track.sample(1).keyframes[0].value, 0.0);
        assert_eq!(track.sample(0).keyframes[0].value, 0.0);
    }

    #[test]
    fn parameter_domain_is_inclusive() {
        let parameter = ControlParameter {
            name: "P".to_string(),
            min: 0,
            max: 3,
            default: 0,
            saved: true,
        };
        assert!(parameter.domain().contains(&3));
        assert!(!parameter.domain().contains(&4));
    }
}
