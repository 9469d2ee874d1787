//! Ordered schema steps for the key-value mirror.
//!
//! # Invariants
//! - Step versions start at 1 and grow by one.
//! - The applied version is mirrored to `PRAGMA user_version`.

use crate::storage::{StorageError, StorageResult};
use log::info;
use rusqlite::Connection;

/// Schema steps; index `n` holds version `n + 1`.
const STEPS: &[&str] = &[include_str!("0001_kv_store.sql")];

/// Latest schema version this build can read and write.
pub fn latest_version() -> u32 {
    STEPS.len() as u32
}

/// Brings `conn` up to [`latest_version`] inside one transaction.
///
/// A database written by a newer build is rejected untouched.
pub fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let from = stored_version(conn)?;
    let to = latest_version();
    if from > to {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }
    if from == to {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (sql, version) in STEPS.iter().zip(1u32..).skip(from as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;
    info!("event=db_migrate module=db status=ok from={from} to={to}");
    Ok(())
}

fn stored_version(conn: &Connection) -> StorageResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
