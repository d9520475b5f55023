//! The stateful controller that owns the current snapshot.
//!
//! [`GraphEditor`] holds the current [`GraphState`], the measurement queue
//! and the observer list. Pointer handlers (in `crate::input`) and
//! measurement callbacks (in `measure`) run a pure transition against the
//! current snapshot, store the result and hand it to every observer.
//!
//! ## Re-entrancy
//!
//! Observers run after the editor's lock is released, so an observer may
//! report new measurements (through a [`MeasureSink`]) or feed more pointer
//! events while it handles a snapshot. Those land in the next flush.
//!
//! ## Teardown
//!
//! Flush handles given to the frame scheduler hold a weak reference only.
//! Once the editor is dropped (or [`GraphEditor::teardown`] is called)
//! outstanding flushes do nothing.

mod measure;

pub use measure::MeasureSink;

use crate::batch::{self, BatchQueue, BatchedAction};
use crate::config::EditorConfig;
use crate::frame::FrameScheduler;
use crate::perf::{BatchStats, ScopedTimer};
use crate::profile_scope;
use crate::state::GraphState;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

type Observer = Arc<dyn Fn(&GraphState) + Send + Sync>;

/// Handle returned by [`GraphEditor::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct EditorCore {
    state: GraphState,
    queue: BatchQueue,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    scheduler: Box<dyn FrameScheduler>,
    config: EditorConfig,
    stats: BatchStats,
    torn_down: bool,
}

impl EditorCore {
    fn observers(&self) -> Vec<Observer> {
        self.observers.iter().map(|(_, observer)| Arc::clone(observer)).collect()
    }
}

/// A flush requested from a [`FrameScheduler`].
///
/// Holds only a weak reference to its editor: running it after the editor
/// is gone does nothing.
pub struct PendingFlush {
    core: Weak<Mutex<EditorCore>>,
}

impl PendingFlush {
    /// Drain the queue and commit the folded snapshot. Returns `true` if a
    /// commit happened.
    pub fn run(self) -> bool {
        let Some(core) = self.core.upgrade() else {
            trace!("flush skipped: editor dropped");
            return false;
        };
        flush(&core)
    }
}

/// Interaction controller for one graph canvas.
pub struct GraphEditor {
    core: Arc<Mutex<EditorCore>>,
}

impl GraphEditor {
    pub fn new(initial: GraphState, scheduler: impl FrameScheduler + 'static) -> Self {
        Self::with_config(initial, scheduler, EditorConfig::default())
    }

    pub fn with_config(
        initial: GraphState,
        scheduler: impl FrameScheduler + 'static,
        config: EditorConfig,
    ) -> Self {
        debug!(
            nodes = initial.editor_state.nodes.len(),
            edges = initial.editor_state.edges.len(),
            "graph editor mounted"
        );
        Self {
            core: Arc::new(Mutex::new(EditorCore {
                state: initial,
                queue: BatchQueue::new(),
                observers: Vec::new(),
                next_subscription: 0,
                scheduler: Box::new(scheduler),
                config,
                stats: BatchStats::default(),
                torn_down: false,
            })),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> GraphState {
        self.core.lock().state.clone()
    }

    pub fn config(&self) -> EditorConfig {
        self.core.lock().config.clone()
    }

    /// Replace the current snapshot from outside (the owner of the state
    /// history changed it). Observers are not notified.
    pub fn set_state(&self, state: GraphState) {
        self.core.lock().state = state;
    }

    /// Call `observer` with every new snapshot.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&GraphState) + Send + Sync + 'static,
    {
        let mut core = self.core.lock();
        let id = SubscriptionId(core.next_subscription);
        core.next_subscription += 1;
        core.observers.push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut core = self.core.lock();
        let before = core.observers.len();
        core.observers.retain(|(existing, _)| *existing != id);
        core.observers.len() != before
    }

    pub fn batch_stats(&self) -> BatchStats {
        self.core.lock().stats
    }

    /// Measurements queued for the next flush.
    pub fn queued_measurements(&self) -> usize {
        self.core.lock().queue.len()
    }

    pub fn is_flush_pending(&self) -> bool {
        self.core.lock().queue.is_flush_requested()
    }

    /// A weak handle observers can report measurements through.
    pub fn measure_sink(&self) -> MeasureSink {
        MeasureSink::new(Arc::downgrade(&self.core))
    }

    /// Unmount: drop queued measurements and observers. Flushes already
    /// handed to the scheduler become no-ops.
    pub fn teardown(self) {
        drop(self);
    }

    /// Run `transition` against the current snapshot. `None` means the
    /// event did not apply; nothing is committed and `false` is returned.
    pub(crate) fn commit<F>(&self, transition: F) -> bool
    where
        F: FnOnce(&GraphState, &EditorConfig) -> Option<GraphState>,
    {
        let (next, observers) = {
            let mut core = self.core.lock();
            if core.torn_down {
                return false;
            }
            let Some(next) = transition(&core.state, &core.config) else {
                return false;
            };
            core.state = next.clone();
            (next, core.observers())
        };

        notify(&observers, &next);
        true
    }

    pub(crate) fn enqueue(&self, action: BatchedAction) -> bool {
        enqueue(&self.core, action)
    }
}

impl Drop for GraphEditor {
    fn drop(&mut self) {
        let mut core = self.core.lock();
        core.torn_down = true;
        core.queue.clear();
        core.observers.clear();
        debug!("graph editor torn down");
    }
}

fn enqueue(core: &Arc<Mutex<EditorCore>>, action: BatchedAction) -> bool {
    let mut guard = core.lock();
    if guard.torn_down {
        return false;
    }
    trace!(action = action.name(), "queued measurement");
    if guard.queue.enqueue(action) {
        let flush = PendingFlush {
            core: Arc::downgrade(core),
        };
        guard.scheduler.request_frame(flush);
    }
    true
}

fn flush(core: &Mutex<EditorCore>) -> bool {
    profile_scope!("batch_flush");

    let (next, observers) = {
        let mut guard = core.lock();
        if guard.torn_down {
            return false;
        }
        let drained = guard.queue.drain();
        if drained.is_empty() {
            return false;
        }

        let timer = ScopedTimer::new("batch_flush", guard.config.slow_flush_ms);
        let batch_len = drained.len();
        let next = batch::fold(drained, &guard.state);
        guard.state = next.clone();

        let elapsed_ms = timer.elapsed_ms();
        guard.stats.record(batch_len, elapsed_ms);
        trace!(actions = batch_len, elapsed_ms, "committed measurement batch");
        (next, guard.observers())
    };

    notify(&observers, &next);
    true
}

fn notify(observers: &[Observer], state: &GraphState) {
    for observer in observers {
        observer(state);
    }
}
