//! Output Rendering
//!
//! Plain-text views of use case results. Every renderer returns a `String`
//! so the binary decides where it goes and tests can compare it directly.

use std::fmt::Write;

use crate::application::{AddResult, CleanResult, Removal, StatusReport, UpdateResult};
use crate::domain::entities::{ConditionMode, Hierarchy, NodeId, Selection, StateMachineSpec};
use crate::domain::value_objects::ObjectPath;
use crate::error::WardrobeResult;

const CHECK: &str = "✓";
const CROSS: &str = "✗";
const ARROW: &str = "→";
const SKIP: &str = "○";

/// One line of `list` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// 1-based, as accepted by `remove`
    pub position: usize,
    /// Parameter value selecting this item
    pub value: usize,
    pub name: String,
    pub path: ObjectPath,
}

/// Rows for `list`, with paths relative to `root`
pub fn list_rows(
    selection: &Selection,
    hierarchy: &Hierarchy,
    root: NodeId,
) -> WardrobeResult<Vec<ListRow>> {
    selection
        .values()
        .map(|(value, item)| {
            Ok(ListRow {
                position: value,
                value,
                name: item.name().to_string(),
                path: hierarchy.relative_path(item.node(), root)?,
            })
        })
        .collect()
}

pub fn render_list(avatar: &str, rows: &[ListRow]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        let _ = writeln!(out, "No items selected for {avatar}.");
        return out;
    }

    let _ = writeln!(out, "{avatar}: {} item(s), value 0 shows none", rows.len());
    for row in rows {
        let _ = writeln!(
            out,
            "  {:>3}. {} (value {}) {}",
            row.position, row.name, row.value, row.path
        );
    }
    out
}

pub fn render_add(result: &AddResult) -> String {
    let mut out = String::new();
    for item in &result.added {
        let _ = writeln!(out, "{CHECK} added {}", item.name());
    }
    for rejected in &result.rejected {
        let _ = writeln!(out, "{CROSS} {}: {}", rejected.path, rejected.error);
    }
    out
}

/// Graph view of a generated layer
pub fn render_state_machine(machine: &StateMachineSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "layer {} (parameter {}, weight {})",
        machine.layer_name, machine.parameter, machine.default_weight
    );

    for (index, state) in machine.states.iter().enumerate() {
        let marker = if index == machine.default_state { "*" } else { " " };
        let motion = state.motion.as_deref().unwrap_or("-");
        let value = state
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            " {marker}[{index}] {} value={value} motion={motion} at ({}, {})",
            state.name, state.position[0], state.position[1]
        );
    }

    for transition in &machine.transitions {
        let guards: Vec<String> = transition
            .conditions
            .iter()
            .map(|c| {
                let op = match c.mode {
                    ConditionMode::Equals => "==",
                    ConditionMode::NotEqual => "!=",
                };
                format!("{} {op} {}", c.parameter, c.threshold)
            })
            .collect();
        let _ = writeln!(
            out,
            "  {} {ARROW} {} when {}",
            machine.states[transition.from].name,
            machine.states[transition.to].name,
            guards.join(" && ")
        );
    }
    out
}

fn render_removal(out: &mut String, removal: &Removal, dry_run: bool) {
    let verb = if dry_run { "would remove" } else { "removed" };
    for artifact in &removal.removed {
        let _ = writeln!(out, "  {verb} {artifact}");
    }
    for artifact in &removal.missing {
        let _ = writeln!(out, "  {SKIP} {artifact} already gone");
    }
}

pub fn render_update(result: &UpdateResult, verbose: u8) -> String {
    let mut out = String::new();
    let build = &result.build;

    if result.dry_run {
        let _ = writeln!(
            out,
            "Dry run: {} item(s), {} state(s), {} transition(s)",
            build.item_count(),
            build.state_machine.states.len(),
            build.state_machine.transitions.len()
        );
    } else if result.is_cleanup_only() {
        let _ = writeln!(out, "{CHECK} Selection is empty, nothing installed");
    } else {
        let _ = writeln!(
            out,
            "{CHECK} Installed {} item(s) as parameter '{}'",
            build.item_count(),
            build.parameter.name
        );
    }

    render_removal(&mut out, &result.removal, result.dry_run);

    if !result.installed.is_empty() {
        let _ = writeln!(
            out,
            "  installed {} artifact(s), fingerprint {}",
            result.installed.len(),
            build.fingerprint().short()
        );
    }

    if result.dry_run || verbose > 0 {
        out.push_str(&render_state_machine(&build.state_machine));
    }
    out
}

pub fn render_clean(result: &CleanResult) -> String {
    let mut out = String::new();
    if !result.has_changes() {
        let _ = writeln!(out, "Nothing to clean.");
        return out;
    }

    if result.dry_run {
        let _ = writeln!(out, "Dry run: {} artifact(s) would be removed", result.removed_count());
    } else {
        let _ = writeln!(out, "{CHECK} Removed {} artifact(s)", result.removed_count());
    }
    render_removal(&mut out, &result.removal, result.dry_run);
    out
}

pub fn render_status(report: &StatusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Avatar: {}", report.avatar);
    let _ = writeln!(out, "Items: {}", report.item_count);
    for path in &report.missing {
        let _ = writeln!(out, "  {CROSS} missing {path}");
    }
    let _ = writeln!(
        out,
        "Installed: {}",
        if report.installed { "yes" } else { "no" }
    );
    if report.installed {
        let handles = if report.handles_resolve() {
            format!("{CHECK} all handles resolve")
        } else {
            format!("{CROSS} {} handle(s) no longer resolve", report.dangling.len())
        };
        let _ = writeln!(out, "  {handles}");
        for artifact in &report.dangling {
            let _ = writeln!(out, "    {artifact}");
        }
    }
    let _ = writeln!(out, "State: {}", report.freshness.as_str());
    out
}
