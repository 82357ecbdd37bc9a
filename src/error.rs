//! Error types for Wardrobe
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::NodeId;

/// Result type alias for Wardrobe operations
pub type WardrobeResult<T> = Result<T, WardrobeError>;

/// Main error type for Wardrobe operations
#[derive(Error, Debug)]
pub enum WardrobeError {
    /// Item is already part of the selection
    #[error("'{name}' is already in the wardrobe")]
    DuplicateItem { name: String },

    /// Object does not live under the avatar root
    #[error("'{name}' is not a descendant of '{root}'")]
    NotDescendant { name: String, root: String },

    /// Selection position out of range
    #[error("index {index} is out of range for a wardrobe of {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A parameter with the reserved name exists and is not owned by us
    #[error("parameter '{name}' already exists and was not generated by wardrobe")]
    ParameterConflict { name: String },

    /// An animator layer with the reserved name exists and is not owned by us
    #[error("layer '{name}' already exists and was not generated by wardrobe")]
    LayerConflict { name: String },

    /// A sub-menu with the reserved name exists and is not owned by us
    #[error("menu '{name}' already exists and was not generated by wardrobe")]
    MenuConflict { name: String },

    /// No object at the given path
    #[error("object not found: {path}")]
    ObjectNotFound { path: String },

    /// Malformed encoded object path
    #[error("invalid object path '{input}': {reason}")]
    InvalidPath { input: String, reason: String },

    /// Node id does not belong to the hierarchy
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// Selection does not fit the integer parameter
    #[error("too many items ({count}) for an integer parameter")]
    TooManyItems { count: usize },

    /// Configuration value rejected
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Persisted file written by an incompatible version
    #[error("unsupported format version {found} in {file} (expected {expected})")]
    VersionMismatch {
        file: PathBuf,
        found: u32,
        expected: u32,
    },

    /// State file was written for a different avatar
    #[error("{file} belongs to avatar '{found}', expected '{expected}'")]
    AvatarMismatch {
        file: PathBuf,
        found: String,
        expected: String,
    },

    /// TOML or JSON could not be parsed or produced
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
