//! Frame-batched mutation queue.
//!
//! Measurement sources (viewport, node sizes, pin offsets) report far more
//! often than the editor can usefully re-render. Each report is queued as a
//! [`BatchedAction`]; the first enqueue after a drain asks for one flush, and
//! the flush folds the whole queue over the current snapshot in arrival order.
//!
//! # Invariants
//!
//! 1. At most one flush is requested per drain cycle, however many actions
//!    arrive before it fires.
//! 2. Actions are applied FIFO; a later measurement of the same id wins.
//! 3. An action enqueued after `drain` belongs to the next cycle.

use crate::state::GraphState;
use crate::types::{NodeId, PinId};
use std::collections::VecDeque;

/// A deferred measurement transition.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchedAction {
    MeasureViewport { width: f32, height: f32 },
    LocateViewport { x: f32, y: f32 },
    MeasureNode { id: NodeId, width: f32, height: f32 },
    MeasurePin { id: PinId, y: f32, height: f32 },
}

impl BatchedAction {
    /// Apply this action's transition.
    pub fn apply(&self, state: &GraphState) -> GraphState {
        match *self {
            Self::MeasureViewport { width, height } => state.measure_viewport(width, height),
            Self::LocateViewport { x, y } => state.locate_viewport(x, y),
            Self::MeasureNode { id, width, height } => state.measure_node(id, width, height),
            Self::MeasurePin { id, y, height } => state.measure_pin(id, y, height),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MeasureViewport { .. } => "measure_viewport",
            Self::LocateViewport { .. } => "locate_viewport",
            Self::MeasureNode { .. } => "measure_node",
            Self::MeasurePin { .. } => "measure_pin",
        }
    }
}

/// Left-fold actions over a base snapshot in order.
pub fn fold<I>(actions: I, base: &GraphState) -> GraphState
where
    I: IntoIterator<Item = BatchedAction>,
{
    actions
        .into_iter()
        .fold(base.clone(), |state, action| action.apply(&state))
}

/// Pending actions plus whether a flush has been requested for them.
#[derive(Debug, Default)]
pub struct BatchQueue {
    pending: VecDeque<BatchedAction>,
    flush_requested: bool,
}

impl BatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action. Returns `true` when the caller must request a
    /// flush, i.e. this is the first action since the last drain.
    pub fn enqueue(&mut self, action: BatchedAction) -> bool {
        let request = !self.flush_requested;
        self.flush_requested = true;
        self.pending.push_back(action);
        request
    }

    /// Swap the queue for an empty one and reopen the cycle.
    pub fn drain(&mut self) -> VecDeque<BatchedAction> {
        self.flush_requested = false;
        std::mem::take(&mut self.pending)
    }

    /// Drop everything without applying it.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.flush_requested = false;
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_flush_requested(&self) -> bool {
        self.flush_requested
    }
}
