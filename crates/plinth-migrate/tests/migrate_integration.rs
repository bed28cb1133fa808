//! Integration tests for the migration runner against an on-disk database.
//!
//! Verifies that the version store persists across connections: a process
//! restart sees the applied level and does not re-run migrations.

use duckdb::Connection;
use plinth_migrate::{current_version, migrate, Migration};

const REGISTRY: &[Migration] = &[
    Migration {
        name: "create_items",
        level: 1,
        sql: "CREATE TABLE items (id INTEGER, label VARCHAR);",
    },
    Migration {
        name: "create_tags",
        level: 2,
        sql: "CREATE TABLE tags (id INTEGER, item_id INTEGER, tag VARCHAR);",
    },
];

#[test]
fn version_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.duckdb");

    {
        let conn = Connection::open(&path).unwrap();
        migrate(&conn, REGISTRY).unwrap();
        assert_eq!(current_version(&conn).unwrap().level, 2);
    }

    // a fresh connection sees the applied level and runs nothing
    let conn = Connection::open(&path).unwrap();
    migrate(&conn, REGISTRY).unwrap();

    let current = current_version(&conn).unwrap();
    assert_eq!(current.level, 2);
    assert!(current.success);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM schemas", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);

    // the migrated tables are usable
    conn.execute("INSERT INTO items VALUES (1, 'first')", [])
        .unwrap();
    let items: i64 = conn
        .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
        .unwrap();
    assert_eq!(items, 1);
}
