//! stl_files CRUD queries.

use meshcat_core::errors::StorageError;
use meshcat_core::types::{MeshRecord, NewMeshRecord};
use rusqlite::{params, Connection, Row};

use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT id, file_name, file_path, file_size, vertex_count, volume,
            model_dimension, modification_date, note, date_added
     FROM stl_files";

fn to_i64(field: &str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::SqliteError {
        message: format!("{field} out of range: {v}"),
    })
}

/// Rows written before a column existed read back as NULL; map those to the
/// record defaults.
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<MeshRecord> {
    let file_size: Option<i64> = row.get(3)?;
    let vertex_count: Option<i64> = row.get(4)?;
    let note: Option<String> = row.get(8)?;
    let date_added: Option<String> = row.get(9)?;
    Ok(MeshRecord {
        id: row.get(0)?,
        file_name: row.get(1)?,
        file_path: row.get(2)?,
        file_size: file_size.map(|v| v.max(0) as u64).unwrap_or(0),
        vertex_count: vertex_count.map(|v| v.max(0) as u64),
        volume: row.get(5)?,
        model_dimension: row.get(6)?,
        modification_date: row.get(7)?,
        note: note.unwrap_or_default(),
        date_added: date_added.unwrap_or_default(),
    })
}

/// Insert a record. `id` and `date_added` are assigned here.
pub fn insert_record(conn: &Connection, record: &NewMeshRecord) -> Result<i64, StorageError> {
    let file_size = to_i64("file_size", record.file_size)?;
    let vertex_count = record
        .vertex_count
        .map(|v| to_i64("vertex_count", v))
        .transpose()?;

    conn.prepare_cached(
        "INSERT INTO stl_files
            (file_name, file_path, file_size, vertex_count, volume, model_dimension,
             modification_date, note, date_added)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, datetime('now'))",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            record.file_name,
            record.file_path,
            file_size,
            vertex_count,
            record.volume,
            record.model_dimension,
            record.modification_date,
            record.note,
        ])
    })
    .map_err(to_storage_err)?;

    Ok(conn.last_insert_rowid())
}

/// Load every record, ordered by id.
pub fn load_all_records(conn: &Connection) -> Result<Vec<MeshRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
        .map_err(to_storage_err)?;

    let rows = stmt.query_map([], record_from_row).map_err(to_storage_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(to_storage_err)?);
    }
    Ok(result)
}

/// Get a single record by id.
pub fn get_record(conn: &Connection, id: i64) -> Result<Option<MeshRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(to_storage_err)?;

    let mut rows = stmt
        .query_map(params![id], record_from_row)
        .map_err(to_storage_err)?;

    match rows.next() {
        Some(Ok(record)) => Ok(Some(record)),
        Some(Err(e)) => Err(to_storage_err(e)),
        None => Ok(None),
    }
}

/// Delete every listed id in one transaction. Unknown ids are skipped.
/// Returns the number of rows removed.
pub fn delete_records(conn: &Connection, ids: &[i64]) -> Result<usize, StorageError> {
    if ids.is_empty() {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction().map_err(to_storage_err)?;
    let mut removed = 0;
    {
        let mut stmt = tx
            .prepare_cached("DELETE FROM stl_files WHERE id = ?1")
            .map_err(to_storage_err)?;
        for id in ids {
            removed += stmt.execute(params![id]).map_err(to_storage_err)?;
        }
    }
    tx.commit().map_err(to_storage_err)?;
    Ok(removed)
}

/// Replace the note on one record. Returns `false` if no row matched.
pub fn update_note(conn: &Connection, id: i64, note: &str) -> Result<bool, StorageError> {
    let changed = conn
        .execute(
            "UPDATE stl_files SET note = ?1 WHERE id = ?2",
            params![note, id],
        )
        .map_err(to_storage_err)?;
    Ok(changed > 0)
}

/// Count total records.
pub fn count_records(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM stl_files", [], |row| row.get(0))
        .map_err(to_storage_err)
}
