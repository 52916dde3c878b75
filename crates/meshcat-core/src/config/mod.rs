//! Configuration system for the mesh catalog.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod catalog_config;
pub mod ingest_config;
pub mod storage_config;

pub use catalog_config::{CatalogConfig, CliOverrides};
pub use ingest_config::IngestConfig;
pub use storage_config::StorageConfig;
