//! Declarative additive columns.
//!
//! Each entry adds one column to the records table if it is missing. Entries
//! are append-only: never remove, rename, or retype a column here.

use meshcat_core::constants::RECORDS_TABLE;
use meshcat_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_storage_err;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }

    /// Literal used as the fill value for existing rows of a NOT NULL column.
    fn default_literal(&self) -> &'static str {
        match self {
            Self::Integer => "0",
            Self::Real => "0.0",
            Self::Text => "''",
        }
    }
}

/// One column introduced after the base schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAddition {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
}

impl ColumnAddition {
    pub const fn nullable(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: true,
        }
    }

    /// Column definition for `ALTER TABLE ... ADD COLUMN`.
    pub fn definition(&self) -> String {
        if self.nullable {
            format!("{} {}", self.name, self.column_type.sql())
        } else {
            format!(
                "{} {} NOT NULL DEFAULT {}",
                self.name,
                self.column_type.sql(),
                self.column_type.default_literal()
            )
        }
    }

    pub fn step_name(&self) -> String {
        format!("add_column:{}", self.name)
    }
}

/// Applied in this order after the base schema.
pub const ADDITIVE_COLUMNS: &[ColumnAddition] = &[
    ColumnAddition::nullable("vertex_count", ColumnType::Integer),
    ColumnAddition::nullable("volume", ColumnType::Real),
    ColumnAddition::nullable("modification_date", ColumnType::Text),
    ColumnAddition::nullable("note", ColumnType::Text),
];

/// Outcome of applying one addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionOutcome {
    Added,
    AlreadyPresent,
}

/// Column names of `table`, in declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(to_storage_err)?;

    let mut columns = Vec::new();
    for row in rows {
        columns.push(row.map_err(to_storage_err)?);
    }
    Ok(columns)
}

/// Add `column` to the records table unless it already exists.
///
/// An existing column is the expected steady state, not a failure. SQLite's
/// "duplicate column name" error is folded into the same outcome.
pub fn apply_addition(
    conn: &Connection,
    column: &ColumnAddition,
) -> Result<AdditionOutcome, StorageError> {
    let existing = table_columns(conn, RECORDS_TABLE)?;
    if existing.iter().any(|c| c.eq_ignore_ascii_case(column.name)) {
        return Ok(AdditionOutcome::AlreadyPresent);
    }

    let sql = format!(
        "ALTER TABLE {RECORDS_TABLE} ADD COLUMN {}",
        column.definition()
    );
    match conn.execute_batch(&sql) {
        Ok(()) => Ok(AdditionOutcome::Added),
        Err(e) if is_duplicate_column(&e) => Ok(AdditionOutcome::AlreadyPresent),
        Err(e) => Err(StorageError::MigrationFailed {
            step: column.step_name(),
            message: e.to_string(),
        }),
    }
}

fn is_duplicate_column(e: &rusqlite::Error) -> bool {
    e.to_string().contains("duplicate column name")
}
