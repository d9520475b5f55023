//! Editor state snapshots.
//!
//! A [`GraphState`] is one immutable value of the whole editor: the graph
//! document plus viewport, pointer gesture and menu. Every transition in
//! [`transitions`] takes `&self` and returns a new snapshot; collections are
//! shared through `Arc` and copied only when a transition writes to them.
//!
//! ## Modules
//!
//! - `transitions` - the pure transition contract (select, move, connect, measure, menu)
//! - `queries` - read-only helpers for renderers (anchors, overlays, hit testing)

mod queries;
mod transitions;

pub use queries::DragOverlay;

use crate::input::MouseState;
use crate::types::{Edge, Node, NodeId, Pin, PinId, PinRef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Screen-to-graph offset and pan translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen-space origin of the canvas
    pub start_x: f32,
    pub start_y: f32,
    /// Pan translation applied at render time
    pub translate_x: f32,
    pub translate_y: f32,
    /// Measured canvas size
    pub width: f32,
    pub height: f32,
}

/// Contextual menu anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuState {
    pub open: bool,
    pub x: f32,
    pub y: f32,
    /// Set when the menu was opened by dropping a connection on empty canvas
    #[serde(default)]
    pub connection: Option<PinRef>,
}

impl MenuState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            open: true,
            x,
            y,
            connection: None,
        }
    }
}

/// The graph document: nodes, pins, edges and the selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    /// Nodes in render order
    pub nodes: Arc<IndexMap<NodeId, Node>>,
    pub pins: Arc<IndexMap<PinId, Pin>>,
    pub edges: Arc<Vec<Edge>>,
    pub selection: Arc<BTreeSet<NodeId>>,
}

impl EditorState {
    /// Build a document. Pins are attached to their owner's pin list when
    /// the owner does not list them already.
    pub fn new(
        nodes: impl IntoIterator<Item = Node>,
        pins: impl IntoIterator<Item = Pin>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut nodes: IndexMap<NodeId, Node> = nodes.into_iter().map(|n| (n.id, n)).collect();
        let pins: IndexMap<PinId, Pin> = pins.into_iter().map(|p| (p.id, p)).collect();

        for pin in pins.values() {
            if let Some(owner) = nodes.get_mut(&pin.node) {
                if !owner.pins.contains(&pin.id) {
                    owner.pins.push(pin.id);
                }
            }
        }

        Self {
            nodes: Arc::new(nodes),
            pins: Arc::new(pins),
            edges: Arc::new(edges.into_iter().collect()),
            selection: Arc::new(BTreeSet::new()),
        }
    }
}

/// The root snapshot handed to observers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub editor_state: EditorState,
    pub viewport: Viewport,
    pub mouse_state: MouseState,
    pub menu_state: MenuState,
}

impl GraphState {
    pub fn new(editor_state: EditorState) -> Self {
        Self {
            editor_state,
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.editor_state.nodes.get(&id)
    }

    pub fn pin(&self, id: PinId) -> Option<&Pin> {
        self.editor_state.pins.get(&id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.editor_state.edges
    }

    pub fn selection(&self) -> &BTreeSet<NodeId> {
        &self.editor_state.selection
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.editor_state.selection.contains(&id)
    }
}
