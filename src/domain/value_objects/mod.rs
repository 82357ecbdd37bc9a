//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_id;
mod hash;
mod object_path;

pub use artifact_id::{ArtifactId, ArtifactKind};
pub use hash::ContentHash;
pub use object_path::ObjectPath;
