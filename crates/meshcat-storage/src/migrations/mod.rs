//! Schema migrations: base schema, then declarative additive columns.
//!
//! Every step checks for existence first, so running the whole sequence on
//! an up-to-date store changes nothing. `PRAGMA user_version` is raised to
//! the step count afterwards for inspection only.

pub mod additive;
pub mod v001_base;

use meshcat_core::constants::RECORDS_TABLE;
use meshcat_core::errors::StorageError;
use rusqlite::Connection;

use self::additive::{apply_addition, AdditionOutcome, ADDITIVE_COLUMNS};
use crate::to_storage_err;

/// Schema version after all steps: the base table plus each additive column.
pub const SCHEMA_VERSION: u32 = 1 + ADDITIVE_COLUMNS.len() as u32;

/// What a migration run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub created_base: bool,
    pub added: Vec<&'static str>,
    pub already_present: Vec<&'static str>,
}

impl MigrationReport {
    /// True when the run found the store already up to date.
    pub fn is_noop(&self) -> bool {
        !self.created_base && self.added.is_empty()
    }
}

/// Ensure the base table and every additive column exist.
/// All steps run in one transaction.
pub fn run_migrations(conn: &Connection) -> Result<MigrationReport, StorageError> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| StorageError::MigrationFailed {
            step: "begin".to_string(),
            message: e.to_string(),
        })?;

    let mut report = MigrationReport {
        created_base: !table_exists(&tx, RECORDS_TABLE)?,
        ..Default::default()
    };

    tx.execute_batch(v001_base::MIGRATION_SQL)
        .map_err(|e| StorageError::MigrationFailed {
            step: "base_schema".to_string(),
            message: e.to_string(),
        })?;
    if report.created_base {
        tracing::info!(table = RECORDS_TABLE, "created base schema");
    }

    for column in ADDITIVE_COLUMNS {
        match apply_addition(&tx, column)? {
            AdditionOutcome::Added => {
                tracing::info!(column = column.name, "added column");
                report.added.push(column.name);
            }
            AdditionOutcome::AlreadyPresent => {
                tracing::debug!(column = column.name, "column already present");
                report.already_present.push(column.name);
            }
        }
    }

    // A store stamped by a newer release keeps its stamp.
    if current_version(&tx)? < SCHEMA_VERSION {
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(|e| StorageError::MigrationFailed {
                step: "user_version".to_string(),
                message: e.to_string(),
            })?;
    }

    tx.commit().map_err(|e| StorageError::MigrationFailed {
        step: "commit".to_string(),
        message: e.to_string(),
    })?;

    Ok(report)
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool, StorageError> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(to_storage_err)?;
    Ok(count > 0)
}
