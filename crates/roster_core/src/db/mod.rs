//! SQLite bootstrap for the key-value mirror of browser storage.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - No key-value reads or writes happen before migrations succeed.
//! - Failures surface as [`StorageError`](crate::storage::StorageError).

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
