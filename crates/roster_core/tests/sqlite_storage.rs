use roster_core::db::migrations::latest_version;
use roster_core::db::{open_db, open_db_in_memory};
use roster_core::{
    EmployeeId, EmployeeStorage, JsonStorage, KeyValueStore, LoadSource, RosterApp, RosterConfig,
    SequentialIds, SqliteKeyValueStore, StorageError, SubmitReport,
};
use rusqlite::Connection;

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn opening_same_file_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(matches!(
        SqliteKeyValueStore::open(&path),
        Err(StorageError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn set_overwrites_previous_value() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();
    assert_eq!(store.get("employees").unwrap(), None);
    store.set("employees", "[]").unwrap();
    store.set("employees", "[1]").unwrap();
    assert_eq!(store.get("employees").unwrap().as_deref(), Some("[1]"));
}

#[test]
fn roster_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");
    let config = RosterConfig::default();

    {
        let storage = JsonStorage::new(SqliteKeyValueStore::open(&path).unwrap());
        let mut app = RosterApp::bootstrap(&config, storage, SequentialIds::starting_at(10));
        assert_eq!(app.source(), LoadSource::Samples);

        assert!(app.open_edit(EmployeeId::new(1)));
        app.update_field("position", "Mid");
        assert!(matches!(app.submit_form(), SubmitReport::Saved(_)));
        assert!(app.request_delete(EmployeeId::new(4)));
        assert!(app.confirm_delete().is_some());
    }

    let storage = JsonStorage::new(SqliteKeyValueStore::open(&path).unwrap());
    let reloaded = storage.load().unwrap().expect("saved roster");
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded[0].position, "Mid");

    let app = RosterApp::bootstrap(&config, storage, SequentialIds::after(&reloaded));
    assert_eq!(app.source(), LoadSource::Storage);
    assert!(app.store().get(EmployeeId::new(4)).is_none());
}
