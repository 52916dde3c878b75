mod application;
mod presentation;

use std::process::ExitCode;

use meshcat_core::errors::CatalogErrorCode;

fn main() -> ExitCode {
    meshcat_core::tracing::init_tracing();

    match application::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
