//! Core domain logic for the Pledgebook commitment registry.
//! This crate is the single source of truth for business invariants.

pub mod counter;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use counter::{BlockCounter, ManualCounter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::deadline::DeadlineRecord;
pub use model::objective::{Objective, ObjectiveStatus, DESCRIPTION_MAX_CHARS};
pub use model::priority::{PriorityRecord, URGENCY_MAX, URGENCY_MIN};
pub use model::{Address, RecordValidationError};
pub use repo::registry_store::{
    DeadlineStore, ObjectiveStore, PriorityStore, RepoError, RepoResult, SqliteRegistryStore,
};
pub use service::registry_service::RegistryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
