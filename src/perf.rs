//! Performance instrumentation.
//!
//! - **Scoped timers**: RAII timing for code blocks, warning past a threshold
//! - **Batch statistics**: how many actions each flush folded and how long it took
//! - **Conditional compilation**: `profile_scope!` is zero-cost without the
//!   `profiling` feature
//!
//! ```ignore
//! fn handle_mouse_move() {
//!     profile_scope!("handle_mouse_move");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports its duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a timer that warns when dropped after `threshold_ms`.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Batch Statistics
// ============================================================================

/// Running totals for measurement flushes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchStats {
    /// Commits produced by flushes
    pub flushes: u64,
    /// Actions folded across all flushes
    pub actions_applied: u64,
    /// Most actions folded into one commit
    pub largest_batch: usize,
    /// Duration of the most recent flush
    pub last_flush_ms: f64,
}

impl BatchStats {
    pub fn record(&mut self, batch_len: usize, elapsed_ms: f64) {
        self.flushes += 1;
        self.actions_applied += batch_len as u64;
        self.largest_batch = self.largest_batch.max(batch_len);
        self.last_flush_ms = elapsed_ms;
    }

    /// Average actions coalesced into each commit.
    pub fn average_batch(&self) -> f64 {
        if self.flushes == 0 {
            return 0.0;
        }
        self.actions_applied as f64 / self.flushes as f64
    }
}
