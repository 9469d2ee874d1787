//! Core state, validation and filtering logic for the employee roster.
//! This crate is the single source of truth for roster invariants.

pub mod app;
pub mod catalog;
pub mod config;
pub mod confirm;
pub mod db;
pub mod filter;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod paginate;
pub mod samples;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validate;
pub mod view;

pub use app::{LoadSource, Notice, NoticeKind, RosterApp, SubmitReport};
pub use catalog::{CatalogEntry, ReferenceCatalog, StaticCatalog};
pub use config::{ConfigError, RosterConfig};
pub use confirm::{DeleteConfirmation, DeleteState};
pub use filter::FilterCriteria;
pub use form::{Commit, FormController, FormMode, FormState, FormValues, SubmitOutcome};
pub use i18n::catalog::{Locale, MessageCatalog};
pub use i18n::Translator;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeProfile, SchemaVariant};
pub use model::field::Field;
pub use model::id::{IdGenerator, SequentialIds, TimestampIds};
pub use paginate::{paginate, total_pages, PageView};
pub use stats::RosterStats;
pub use storage::{
    EmployeeStorage, JsonStorage, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore,
    StorageError,
};
pub use store::{EmployeeStore, StoreError};
pub use validate::{validate_field, validate_form, FieldError, FieldErrorKind, ValidationErrors};
pub use view::{ListView, ViewMode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
