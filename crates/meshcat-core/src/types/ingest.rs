//! Outcome of a batch ingestion.

use std::fmt;

use crate::errors::ExtractError;

/// Non-fatal results of a batch: the ids inserted and the files skipped.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Number of paths submitted.
    pub attempted: usize,
    /// Store ids of the records inserted, in submission order.
    pub imported_ids: Vec<i64>,
    /// Files that could not be extracted and were skipped.
    pub failures: Vec<ExtractError>,
    /// True when the batch stopped early on request.
    pub cancelled: bool,
}

impl IngestReport {
    pub fn new(attempted: usize) -> Self {
        Self {
            attempted,
            ..Default::default()
        }
    }

    pub fn imported_count(&self) -> usize {
        self.imported_ids.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Paths that were either imported or skipped.
    pub fn processed(&self) -> usize {
        self.imported_count() + self.failure_count()
    }

    /// True when every submitted path was imported.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} files imported, {} failed",
            self.imported_count(),
            self.attempted,
            self.failure_count()
        )?;
        if self.cancelled {
            write!(
                f,
                " (cancelled, {} not processed)",
                self.attempted.saturating_sub(self.processed())
            )?;
        }
        Ok(())
    }
}
