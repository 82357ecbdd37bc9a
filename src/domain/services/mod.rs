//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod selector_builder;

pub use selector_builder::{BuilderSettings, ExclusiveSelectorBuilder, StateLayout, DEFAULT_STATE};
