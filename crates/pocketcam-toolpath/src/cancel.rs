//! Cooperative cancellation for long-running fill computations.

use crate::error::{PocketError, PocketResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag polled by fill strategies at each outer-loop iteration.
///
/// Clones share the same flag, so a preview thread can hand one clone to the
/// computation and keep another to cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Clears a previous request so the flag can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns `Err(PocketError::Cancelled)` once cancellation was requested.
    pub fn check(&self) -> PocketResult<()> {
        if self.is_cancelled() {
            Err(PocketError::Cancelled)
        } else {
            Ok(())
        }
    }
}
