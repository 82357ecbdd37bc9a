//! Clean Use Case
//!
//! Removes everything the ledger says a previous update installed.
//!
//! This module handles:
//! - Removing recorded handles from the avatar stores
//! - Reporting handles that no longer resolve
//! - Clearing the ledger

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{ArtifactRef, CleanResult, Removal};
pub use use_case::CleanUseCase;

pub(crate) use use_case::remove_recorded;
