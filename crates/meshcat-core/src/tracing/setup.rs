//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Directives used when `MESHCAT_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str =
    "meshcat_core=info,meshcat_storage=info,meshcat_extract=info,meshcat_engine=info,meshcat=info";

/// Initialize the catalog's tracing/logging system.
///
/// Reads `MESHCAT_LOG` for per-crate log levels, e.g.
/// `MESHCAT_LOG=meshcat_storage=debug,meshcat_engine=info`.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // A subscriber installed by the host process wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
