//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SelectionUseCase` - Load, extend and save the working set
//! - `UpdateUseCase` - Build and install the selector, replacing the previous one
//! - `CleanUseCase` - Remove everything the ledger recorded
//! - `StatusQuery` - Compare selection, ledger and scene

pub mod clean;
pub mod selection;
pub mod state_files;
pub mod status;
pub mod update;

pub use clean::{ArtifactRef, CleanOptions, CleanResult, CleanUseCase, Removal};
pub use selection::{
    add_paths, add_relative_paths, resolve_persisted, AddResult, LoadedSelection, RejectedPath,
    SelectionUseCase,
};
pub use state_files::{file_stem, StateFiles};
pub use status::{Freshness, StatusQuery, StatusReport};
pub use update::{UpdateOptions, UpdateResult, UpdateUseCase};
