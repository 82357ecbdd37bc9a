//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use wardrobe::application::{ArtifactRef, CleanResult, StatusReport, UpdateResult};
use wardrobe::config::ConfigWarning;
use wardrobe::presentation::output::ListRow;

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigWarningEvent {
    pub event: &'static str,
    pub key: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConfigWarning> for ConfigWarningEvent {
    fn from(w: &ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            key: w.key.clone(),
            file: w.file.display().to_string(),
            line: w.line,
            suggestion: w.suggestion.clone(),
        }
    }
}

/// One selected item, as listed.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEvent {
    pub event: &'static str,
    pub position: usize,
    pub value: usize,
    pub name: String,
    pub path: String,
}

impl From<&ListRow> for ItemEvent {
    fn from(row: &ListRow) -> Self {
        Self {
            event: "item",
            position: row.position,
            value: row.value,
            name: row.name.clone(),
            path: row.path.encode(),
        }
    }
}

/// A saved path that no longer resolves.
#[derive(Debug, Clone, Serialize)]
pub struct MissingItemEvent {
    pub event: &'static str,
    pub path: String,
}

impl MissingItemEvent {
    pub fn new(path: String) -> Self {
        Self {
            event: "missing_item",
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddedEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
}

impl<'a> AddedEvent<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            event: "added",
            name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedEvent {
    pub event: &'static str,
    pub path: String,
    pub message: String,
}

impl RejectedEvent {
    pub fn new(path: String, message: String) -> Self {
        Self {
            event: "rejected",
            path,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovedItemEvent<'a> {
    pub event: &'static str,
    pub position: usize,
    pub name: &'a str,
}

impl<'a> RemovedItemEvent<'a> {
    pub fn new(position: usize, name: &'a str) -> Self {
        Self {
            event: "item_removed",
            position,
            name,
        }
    }
}

/// A ledger-recorded artifact that was (or would be) removed, or was gone.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub id: u64,
}

impl ArtifactEvent {
    pub fn removed(artifact: &ArtifactRef, dry_run: bool) -> Self {
        Self {
            event: if dry_run { "would_remove" } else { "removed" },
            kind: artifact.kind.as_str(),
            id: artifact.id.get(),
        }
    }

    pub fn missing(artifact: &ArtifactRef) -> Self {
        Self {
            event: "missing",
            kind: artifact.kind.as_str(),
            id: artifact.id.get(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateEvent {
    pub event: &'static str,
    pub dry_run: bool,
    pub items: usize,
    pub parameter: String,
    pub states: usize,
    pub transitions: usize,
    pub installed: usize,
    pub fingerprint: String,
}

impl From<&UpdateResult> for UpdateEvent {
    fn from(result: &UpdateResult) -> Self {
        let machine = &result.build.state_machine;
        Self {
            event: "update",
            dry_run: result.dry_run,
            items: result.item_count(),
            parameter: result.build.parameter.name.clone(),
            states: machine.states.len(),
            transitions: machine.transitions.len(),
            installed: result.installed.len(),
            fingerprint: result.build.fingerprint().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanEvent {
    pub event: &'static str,
    pub dry_run: bool,
    pub removed: usize,
    pub missing: usize,
}

impl From<&CleanResult> for CleanEvent {
    fn from(result: &CleanResult) -> Self {
        Self {
            event: "clean",
            dry_run: result.dry_run,
            removed: result.removal.removed.len(),
            missing: result.removal.missing.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent {
    pub event: &'static str,
    pub avatar: String,
    pub items: usize,
    pub missing: Vec<String>,
    pub installed: bool,
    pub handles_resolve: bool,
    pub state: &'static str,
}

impl From<&StatusReport> for StatusEvent {
    fn from(report: &StatusReport) -> Self {
        Self {
            event: "status",
            avatar: report.avatar.clone(),
            items: report.item_count,
            missing: report.missing.iter().map(|p| p.encode()).collect(),
            installed: report.installed,
            handles_resolve: report.handles_resolve(),
            state: report.freshness.as_str(),
        }
    }
}
