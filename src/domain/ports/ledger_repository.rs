//! LedgerRepository port - abstraction for ledger persistence
//!
//! This trait allows the application layer to load/save ledgers
//! without knowing about TOML serialization details.

use std::path::Path;

use crate::domain::entities::Ledger;
use crate::error::WardrobeResult;

/// Abstract repository for ledger persistence
pub trait LedgerRepository {
    /// Load the ledger at `path`, or an empty one for `avatar` if none exists.
    ///
    /// A ledger recorded for another avatar is an `AvatarMismatch` error.
    fn load_or_new(&self, path: &Path, avatar: &str) -> WardrobeResult<Ledger>;

    /// Save ledger to path
    fn save(&self, ledger: &Ledger, path: &Path) -> WardrobeResult<()>;

    /// Delete the ledger file if present
    fn delete(&self, path: &Path) -> WardrobeResult<()>;
}
