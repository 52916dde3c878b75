//! Base schema: the columns every catalog store has had since the first release.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS stl_files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL,
    file_path TEXT NOT NULL,
    file_size INTEGER,
    model_dimension TEXT,
    date_added TEXT
);
"#;
