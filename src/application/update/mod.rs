//! Update Use Case
//!
//! Rebuilds the selector for the current selection and swaps it into the
//! avatar stores:
//! 1. Build (pure; errors leave the scene untouched)
//! 2. Remove what the ledger recorded
//! 3. Install parameter, clips, menu and layer, rolling back on failure
//! 4. Hand back the ledger describing the new install

mod options;
mod result;
mod use_case;

pub use options::UpdateOptions;
pub use result::UpdateResult;
pub use use_case::UpdateUseCase;
