use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "meshcat: a local catalog of 3D mesh files", long_about = None)]
pub struct Cli {
    /// Catalog database file (overrides config and MESHCAT_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Skip files larger than this many bytes
    #[arg(long, global = true)]
    pub max_file_size: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import mesh files into the catalog
    Import {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List every record, oldest first
    List,

    /// Print the record count and total size
    Stats,

    /// Replace the note on one record
    Note {
        id: i64,
        /// new note text; omit to clear
        #[arg(default_value = "")]
        text: String,
    },

    /// Delete records by id
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Export all records as CSV (header row first)
    Export {
        /// output file; stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// write JSON instead of CSV
        #[arg(long)]
        json: bool,
        /// pretty-print the JSON
        #[arg(long, requires = "json")]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["meshcat", "import", "a.stl", "b.stl", "--db", "x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        match cli.command {
            Commands::Import { paths } => assert_eq!(paths.len(), 2),
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn note_text_defaults_to_empty() {
        let cli = Cli::try_parse_from(["meshcat", "note", "7"]).unwrap();
        match cli.command {
            Commands::Note { id, text } => {
                assert_eq!(id, 7);
                assert!(text.is_empty());
            }
            _ => panic!("expected note"),
        }
    }

    #[test]
    fn export_defaults_to_csv_on_stdout() {
        let cli = Cli::try_parse_from(["meshcat", "export"]).unwrap();
        match cli.command {
            Commands::Export { out, json, pretty } => {
                assert!(out.is_none());
                assert!(!json);
                assert!(!pretty);
            }
            _ => panic!("expected export"),
        }
        assert!(Cli::try_parse_from(["meshcat", "export", "--pretty"]).is_err());
    }

    #[test]
    fn import_requires_a_path() {
        assert!(Cli::try_parse_from(["meshcat", "import"]).is_err());
    }
}
