//! Frame clocks that decide when a requested flush runs.
//!
//! The editor hands each requested flush to a [`FrameScheduler`] as a
//! [`PendingFlush`]. The host's frame loop (or a fixed timer when there is
//! no frame clock) runs it later. A flush whose editor is gone is a no-op.

use crate::config::EditorConfig;
use crate::editor::PendingFlush;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::trace;

/// Accepts flush requests and runs them at the next frame boundary.
///
/// Implementations must not run the flush from inside `request_frame`: the
/// editor is mid-update when it calls this.
pub trait FrameScheduler: Send {
    fn request_frame(&mut self, flush: PendingFlush);
}

// ============================================================================
// Manual Frame Clock
// ============================================================================

/// Runs pending flushes when the host calls [`advance`](Self::advance),
/// typically once per rendered frame. Clones share one queue.
#[derive(Clone, Default)]
pub struct ManualFrameClock {
    pending: Arc<Mutex<Vec<PendingFlush>>>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flushes waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Run every flush requested before this call. Flushes requested while
    /// these run wait for the next frame. Returns how many committed.
    pub fn advance(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.lock());
        run_all(due)
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_frame(&mut self, flush: PendingFlush) {
        self.pending.lock().push(flush);
    }
}

// ============================================================================
// Fallback Timer
// ============================================================================

/// Fixed-interval fallback for hosts without a frame clock: a flush becomes
/// due `interval` after it was requested and runs on the next
/// [`poll`](Self::poll) at or after that deadline.
#[derive(Clone)]
pub struct FallbackTimer {
    interval: Duration,
    pending: Arc<Mutex<Vec<(Instant, PendingFlush)>>>,
}

impl FallbackTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.frame_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Earliest deadline among waiting flushes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.lock().iter().map(|(deadline, _)| *deadline).min()
    }

    /// Run every flush whose deadline is at or before `now`.
    pub fn poll(&self, now: Instant) -> usize {
        let due: Vec<PendingFlush> = {
            let mut guard = self.pending.lock();
            let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut *guard)
                .into_iter()
                .partition(|(deadline, _)| *deadline <= now);
            *guard = waiting;
            due.into_iter().map(|(_, flush)| flush).collect()
        };
        run_all(due)
    }
}

impl FrameScheduler for FallbackTimer {
    fn request_frame(&mut self, flush: PendingFlush) {
        let deadline = Instant::now() + self.interval;
        self.pending.lock().push((deadline, flush));
    }
}

fn run_all(due: Vec<PendingFlush>) -> usize {
    if due.is_empty() {
        return 0;
    }
    let requested = due.len();
    let committed = due.into_iter().map(PendingFlush::run).filter(|ran| *ran).count();
    trace!(requested, committed, "frame boundary");
    committed
}
