//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod avatar_stores;
pub mod file_system;
pub mod ledger_repository;
pub mod scene_repository;
pub mod selection_repository;

pub use avatar_stores::{AnimationStore, AvatarScene, MenuStore, ParameterStore};
pub use file_system::{FileSystem, FsError, FsResult};
pub use ledger_repository::LedgerRepository;
pub use scene_repository::SceneRepository;
pub use selection_repository::{PersistedSelection, SelectionRepository};
