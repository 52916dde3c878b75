//! Workspace-wide constants.

/// Default store file, resolved relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "stl_files.db";

/// Name of the record table. Shared with stores written by earlier releases.
pub const RECORDS_TABLE: &str = "stl_files";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "meshcat.toml";

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "MESHCAT_LOG";

/// Format used for `modification_date` and `date_added`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default number of read-only connections for file-backed stores.
pub const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Upper bound on read-only connections.
pub const MAX_READ_POOL_SIZE: usize = 8;
