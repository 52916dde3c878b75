use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use meshcat_core::errors::{
    CatalogError, CatalogErrorCode, ConfigError, IngestAborted, StorageError,
};
use meshcat_engine::CatalogEngine;

use super::export;

/// Anything that can end a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Cannot encode export rows: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot write CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot create {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write output: {0}")]
    Write(#[source] io::Error),
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::Catalog(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Catalog(e.into())
    }
}

impl From<IngestAborted> for CliError {
    fn from(e: IngestAborted) -> Self {
        Self::Catalog(e.into())
    }
}

impl CatalogErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::CurrentDir(_)
            | Self::Json(_)
            | Self::Csv(_)
            | Self::Output { .. }
            | Self::Write(_) => "CLI_ERROR",
        }
    }
}

pub fn handle_import(engine: &CatalogEngine, paths: &[PathBuf]) -> Result<(), CliError> {
    let report = engine.ingest(paths)?;
    for failure in &report.failures {
        eprintln!("skipped: {failure}");
    }
    println!("{report}");
    Ok(())
}

pub fn handle_list(engine: &CatalogEngine) -> Result<(), CliError> {
    for record in engine.scan()? {
        println!("{}", record.summary_line());
    }
    Ok(())
}

pub fn handle_stats(engine: &CatalogEngine) -> Result<(), CliError> {
    println!("{}", engine.statistics()?);
    Ok(())
}

pub fn handle_note(engine: &CatalogEngine, id: i64, text: &str) -> Result<(), CliError> {
    if engine.annotate(id, text)? {
        println!("note updated for #{id}");
    } else {
        eprintln!("no record with id {id}");
    }
    Ok(())
}

pub fn handle_delete(engine: &CatalogEngine, ids: &[i64]) -> Result<(), CliError> {
    let removed = engine.delete(ids)?;
    println!("{removed} of {} records deleted", ids.len());
    Ok(())
}

pub fn handle_export(
    engine: &CatalogEngine,
    out: Option<&Path>,
    json: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let rows = engine.export_rows()?;
    let mut sink: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|source| {
            CliError::Output {
                path: path.to_path_buf(),
                source,
            }
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    if json {
        export::write_json(&rows, &mut sink, pretty)?;
        writeln!(sink).map_err(CliError::Write)?;
        sink.flush().map_err(CliError::Write)?;
    } else {
        export::write_csv(&rows, sink)?;
    }

    if let Some(path) = out {
        eprintln!("exported {} records to {}", rows.len(), path.display());
    }
    Ok(())
}
