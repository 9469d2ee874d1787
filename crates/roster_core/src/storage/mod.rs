//! Persistence boundary mirroring browser local storage.
//!
//! # Responsibility
//! - Define the key-value contract a storage backend must provide.
//! - Encode the employee collection as one JSON blob under a single key.
//!
//! # Invariants
//! - Storage is written only after a mutation has fully completed.
//! - A missing key means "no prior state", not an error.

pub mod memory;
pub mod sqlite;

use crate::model::employee::Employee;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Key used by the original browser build.
pub const DEFAULT_EMPLOYEES_KEY: &str = "employees";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Collection could not be serialized.
    Encode(serde_json::Error),
    /// Stored blob under `key` is not a valid collection.
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Encode(err) => write!(f, "failed to encode employees: {err}"),
            Self::Decode { key, source } => {
                write!(f, "invalid employee data under `{key}`: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Encode(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Load/save contract for the employee collection.
pub trait EmployeeStorage {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<Vec<Employee>>>;
    fn save(&self, employees: &[Employee]) -> StorageResult<()>;
}

/// Stores the collection as a JSON array under one key.
#[derive(Debug)]
pub struct JsonStorage<K: KeyValueStore> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> JsonStorage<K> {
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_EMPLOYEES_KEY)
    }

    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}

impl<K: KeyValueStore> EmployeeStorage for JsonStorage<K> {
    fn load(&self) -> StorageResult<Option<Vec<Employee>>> {
        let Some(blob) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let employees: Vec<Employee> =
            serde_json::from_str(&blob).map_err(|source| StorageError::Decode {
                key: self.key.clone(),
                source,
            })?;
        debug!(
            "event=storage_load module=storage status=ok key={} count={}",
            self.key,
            employees.len()
        );
        Ok(Some(employees))
    }

    fn save(&self, employees: &[Employee]) -> StorageResult<()> {
        let blob = serde_json::to_string(employees).map_err(StorageError::Encode)?;
        self.backend.set(&self.key, &blob)?;
        debug!(
            "event=storage_save module=storage status=ok key={} count={}",
            self.key,
            employees.len()
        );
        Ok(())
    }
}
