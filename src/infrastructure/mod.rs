//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `avatar/` - In-memory host avatar implementing the store ports
//! - `fs/` - File system implementation and config home lookup
//! - `repositories/` - TOML repositories (Scene, Selection, Ledger)

pub mod avatar;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use avatar::SceneDocument;
pub use fs::LocalFs;
pub use repositories::{TomlLedgerRepository, TomlSceneRepository, TomlSelectionRepository};
