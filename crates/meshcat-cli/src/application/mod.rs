pub mod export;
pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use meshcat_core::config::{CatalogConfig, CliOverrides};
use meshcat_engine::CatalogEngine;

pub use handlers::CliError;

pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        db_path: cli.db.map(|p| p.to_string_lossy().into_owned()),
        max_file_size: cli.max_file_size,
    };
    let root = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let config = CatalogConfig::load(&root, Some(&overrides))?;
    tracing::debug!(db = %config.storage.effective_db_path().display(), "opening catalog");
    let engine = CatalogEngine::open(&config)?;

    match cli.command {
        Commands::Import { paths } => handlers::handle_import(&engine, &paths),
        Commands::List => handlers::handle_list(&engine),
        Commands::Stats => handlers::handle_stats(&engine),
        Commands::Note { id, text } => handlers::handle_note(&engine, id, &text),
        Commands::Delete { ids } => handlers::handle_delete(&engine, &ids),
        Commands::Export { out, json, pretty } => {
            handlers::handle_export(&engine, out.as_deref(), json, pretty)
        }
    }
}
