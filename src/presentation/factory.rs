//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CleanUseCase, SelectionUseCase, StatusQuery, UpdateUseCase};
use crate::config::Config;
use crate::domain::services::ExclusiveSelectorBuilder;
use crate::infrastructure::{TomlLedgerRepository, TomlSceneRepository, TomlSelectionRepository};

/// Type alias for the concrete SelectionUseCase
pub type ConcreteSelectionUseCase = SelectionUseCase<TomlSelectionRepository>;

/// Selector builder configured from `config`
pub fn create_builder(config: &Config) -> ExclusiveSelectorBuilder {
    ExclusiveSelectorBuilder::new(config.builder_settings())
}

pub fn create_selection_use_case() -> ConcreteSelectionUseCase {
    SelectionUseCase::new(TomlSelectionRepository::new())
}

pub fn create_update_use_case(config: &Config) -> UpdateUseCase {
    UpdateUseCase::new(create_builder(config))
}

pub fn create_clean_use_case() -> CleanUseCase {
    CleanUseCase::new()
}

pub fn create_status_query(config: &Config) -> StatusQuery {
    StatusQuery::new(create_builder(config))
}

pub fn create_scene_repository() -> TomlSceneRepository {
    TomlSceneRepository::new()
}

pub fn create_ledger_repository() -> TomlLedgerRepository {
    TomlLedgerRepository::new()
}
