//! Cooperative cancellation for batch ingestion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the ingestion loop before each file. Work already committed
/// stays committed; only the remaining files are left unprocessed.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    fn cancel(&self);
}

/// A bare flag, e.g. a `static` set from a signal handler.
impl Cancellable for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.store(true, Ordering::Relaxed);
    }
}

/// Shareable token. Clones observe the same flag, so one can be handed to
/// another thread and cancelled from there while ingestion runs.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.is_cancelled()
    }

    fn cancel(&self) {
        self.flag.cancel();
    }
}
