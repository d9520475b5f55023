//! Measurement callbacks: batched, committed once per frame.

use super::{EditorCore, GraphEditor, enqueue};
use crate::batch::BatchedAction;
use crate::types::{NodeId, PinId};
use parking_lot::Mutex;
use std::sync::Weak;

impl GraphEditor {
    /// The canvas was resized.
    pub fn measure_viewport(&self, width: f32, height: f32) -> bool {
        self.enqueue(BatchedAction::MeasureViewport { width, height })
    }

    /// The canvas moved on screen.
    pub fn locate_viewport(&self, x: f32, y: f32) -> bool {
        self.enqueue(BatchedAction::LocateViewport { x, y })
    }

    /// A node widget reported its size.
    pub fn measure_node(&self, id: NodeId, width: f32, height: f32) -> bool {
        self.enqueue(BatchedAction::MeasureNode { id, width, height })
    }

    /// A pin widget reported its offset within its node.
    pub fn measure_pin(&self, id: PinId, y: f32, height: f32) -> bool {
        self.enqueue(BatchedAction::MeasurePin { id, y, height })
    }
}

/// Weak measurement handle for size observers.
///
/// Cheap to clone and safe to keep past the editor's lifetime: once the
/// editor is gone every call returns `false`.
#[derive(Clone)]
pub struct MeasureSink {
    core: Weak<Mutex<EditorCore>>,
}

impl MeasureSink {
    pub(super) fn new(core: Weak<Mutex<EditorCore>>) -> Self {
        Self { core }
    }

    pub fn measure_viewport(&self, width: f32, height: f32) -> bool {
        self.send(BatchedAction::MeasureViewport { width, height })
    }

    pub fn locate_viewport(&self, x: f32, y: f32) -> bool {
        self.send(BatchedAction::LocateViewport { x, y })
    }

    pub fn measure_node(&self, id: NodeId, width: f32, height: f32) -> bool {
        self.send(BatchedAction::MeasureNode { id, width, height })
    }

    pub fn measure_pin(&self, id: PinId, y: f32, height: f32) -> bool {
        self.send(BatchedAction::MeasurePin { id, y, height })
    }

    fn send(&self, action: BatchedAction) -> bool {
        match self.core.upgrade() {
            Some(core) => enqueue(&core, action),
            None => false,
        }
    }
}
