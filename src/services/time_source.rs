//! Time capability used for visit debouncing.
//!
//! The tracker never reads the wall clock directly; it asks a `TimeSource`,
//! so tests can drive time by hand.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic instants.
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Real time, backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven time. Clones share the same offset, so a test can keep one
/// handle while the tracker owns another.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Moves time forward for every clone of this source.
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }

    /// Convenience wrapper around `advance` for millisecond steps.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Total time advanced since creation.
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }
}
