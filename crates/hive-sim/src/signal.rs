//! Shared stop flag for the graceful shutdown policy.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A one-way flag the driver raises and agent threads poll once per tick.
///
/// Clones share the same flag.  Under [`ShutdownPolicy::Abandon`] the flag
/// is never raised.
///
/// [`ShutdownPolicy::Abandon`]: hive_core::ShutdownPolicy::Abandon
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
