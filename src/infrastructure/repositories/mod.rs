//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod ledger;
mod scene;
mod selection;

pub use ledger::TomlLedgerRepository;
pub use scene::{parse_scene, render_scene, TomlSceneRepository, SCENE_VERSION};
pub use selection::TomlSelectionRepository;
