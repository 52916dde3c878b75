//! Schema migration tests: idempotence, legacy upgrades, version stamp.

use meshcat_core::traits::CatalogStore;
use meshcat_core::types::NewMeshRecord;
use meshcat_storage::migrations::additive::{table_columns, ADDITIVE_COLUMNS};
use meshcat_storage::migrations::{self, SCHEMA_VERSION};
use meshcat_storage::queries::records;
use meshcat_storage::CatalogDb;
use rusqlite::Connection;
use tempfile::TempDir;

const ALL_COLUMNS: [&str; 10] = [
    "id",
    "file_name",
    "file_path",
    "file_size",
    "model_dimension",
    "date_added",
    "vertex_count",
    "volume",
    "modification_date",
    "note",
];

fn schema_snapshot(conn: &Connection) -> Vec<(String, String)> {
    let mut stmt = conn
        .prepare("SELECT name, sql FROM sqlite_master WHERE sql IS NOT NULL ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect()
}

fn sample(name: &str, size: u64) -> NewMeshRecord {
    NewMeshRecord {
        file_name: name.to_string(),
        file_path: format!("/models/{name}"),
        file_size: size,
        vertex_count: Some(8),
        volume: Some(1.0),
        model_dimension: Some("[1 1 1]".to_string()),
        modification_date: Some("2024-03-01 10:00:00".to_string()),
        note: String::new(),
    }
}

#[test]
fn fresh_store_gets_full_schema() {
    let conn = Connection::open_in_memory().unwrap();
    let report = migrations::run_migrations(&conn).unwrap();

    assert!(report.created_base);
    assert_eq!(report.added.len(), ADDITIVE_COLUMNS.len());
    assert!(report.already_present.is_empty());
    assert_eq!(table_columns(&conn, "stl_files").unwrap(), ALL_COLUMNS);
}

#[test]
fn running_twice_is_a_noop() {
    let conn = Connection::open_in_memory().unwrap();
    migrations::run_migrations(&conn).unwrap();
    records::insert_record(&conn, &sample("a.stl", 100)).unwrap();
    records::insert_record(&conn, &sample("b.stl", 250)).unwrap();

    let before_schema = schema_snapshot(&conn);
    let before_rows = records::load_all_records(&conn).unwrap();

    let report = migrations::run_migrations(&conn).unwrap();

    assert!(report.is_noop());
    assert_eq!(report.already_present.len(), ADDITIVE_COLUMNS.len());
    assert_eq!(schema_snapshot(&conn), before_schema);
    assert_eq!(records::load_all_records(&conn).unwrap(), before_rows);
}

#[test]
fn reopening_file_store_preserves_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.db");

    let ids = {
        let db = CatalogDb::open(&path, 2).unwrap();
        assert!(db.manager().migration_report().created_base);
        vec![
            db.insert(&sample("a.stl", 100)).unwrap(),
            db.insert(&sample("b.stl", 250)).unwrap(),
        ]
    };

    let db = CatalogDb::open(&path, 2).unwrap();
    assert!(db.manager().migration_report().is_noop());
    let scanned: Vec<i64> = db.scan().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(scanned, ids);
}

#[test]
fn base_only_store_is_upgraded_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE stl_files (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                file_name TEXT NOT NULL,
                file_path TEXT NOT NULL,
                file_size INTEGER,
                model_dimension TEXT,
                date_added TEXT
            );
            INSERT INTO stl_files (file_name, file_path, file_size, model_dimension, date_added)
            VALUES ('old.stl', '/old.stl', 42, '[2 2 2]', '2023-01-01 00:00:00');",
        )
        .unwrap();
    }

    let db = CatalogDb::open(&path, 1).unwrap();
    let report = db.manager().migration_report();
    assert!(!report.created_base);
    assert_eq!(
        report.added,
        vec!["vertex_count", "volume", "modification_date", "note"]
    );

    let rows = db.scan().unwrap();
    assert_eq!(rows.len(), 1);
    let old = &rows[0];
    assert_eq!(old.file_name, "old.stl");
    assert_eq!(old.file_size, 42);
    assert_eq!(old.model_dimension.as_deref(), Some("[2 2 2]"));
    assert_eq!(old.date_added, "2023-01-01 00:00:00");
    assert!(old.vertex_count.is_none());
    assert!(old.volume.is_none());
    assert!(old.modification_date.is_none());
    assert_eq!(old.note, "");
}

#[test]
fn partially_migrated_store_only_gets_missing_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE stl_files (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name TEXT NOT NULL,
            file_path TEXT NOT NULL,
            file_size INTEGER,
            model_dimension TEXT,
            date_added TEXT,
            vertex_count INTEGER
        );",
    )
    .unwrap();

    let report = migrations::run_migrations(&conn).unwrap();
    assert_eq!(report.already_present, vec!["vertex_count"]);
    assert_eq!(report.added, vec!["volume", "modification_date", "note"]);
}

#[test]
fn store_with_every_column_upfront_needs_nothing() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE stl_files (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name TEXT NOT NULL,
            file_path TEXT NOT NULL,
            file_size INTEGER,
            vertex_count INTEGER,
            volume REAL,
            model_dimension TEXT,
            modification_date TEXT,
            note TEXT,
            date_added TEXT
        );",
    )
    .unwrap();

    let report = migrations::run_migrations(&conn).unwrap();
    assert!(report.is_noop());
    assert_eq!(report.already_present.len(), 4);
}

#[test]
fn version_is_stamped_and_never_lowered() {
    let conn = Connection::open_in_memory().unwrap();
    migrations::run_migrations(&conn).unwrap();
    assert_eq!(migrations::current_version(&conn).unwrap(), SCHEMA_VERSION);

    conn.pragma_update(None, "user_version", SCHEMA_VERSION + 3)
        .unwrap();
    migrations::run_migrations(&conn).unwrap();
    assert_eq!(
        migrations::current_version(&conn).unwrap(),
        SCHEMA_VERSION + 3
    );
}
