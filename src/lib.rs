//! wardrobe - mutually-exclusive selector generator
//!
//! Given an ordered list of objects under an avatar root, wardrobe generates
//! one integer control parameter, a visibility track per object, a clip per
//! object state, a star-topology state machine and a menu, so that setting the
//! parameter to `k` shows object `k` and hides the rest (0 hides all).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{BuildResult, Hierarchy, Item, NodeId, Selection};
pub use domain::services::{BuilderSettings, ExclusiveSelectorBuilder};
pub use domain::value_objects::ObjectPath;
pub use error::{WardrobeError, WardrobeResult};
