//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGraphBuilder` - Builder pattern for creating test graphs
//! - `Recorder` - Observer that keeps every snapshot an editor commits
//! - Pointer event constructors and invariant assertions

use graphboard::{
    ButtonMask, Edge, EditorConfig, EditorState, GraphEditor, GraphState, ManualFrameClock,
    Modifiers, Node, NodeId, Pin, PinId, PointerEvent, Viewport,
};
use parking_lot::Mutex;
use std::sync::Arc;

// ============================================================================
// TestGraphBuilder
// ============================================================================

/// Builder for creating test graphs.
///
/// # Example
/// ```ignore
/// let state = TestGraphBuilder::new()
///     .with_node(1, (0.0, 0.0), (100.0, 50.0))
///     .with_output(10, 1)
///     .build();
/// ```
#[derive(Default)]
pub struct TestGraphBuilder {
    nodes: Vec<Node>,
    pins: Vec<Pin>,
    edges: Vec<Edge>,
    viewport: Viewport,
}

impl TestGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: NodeId, pos: (f32, f32), size: (f32, f32)) -> Self {
        self.nodes.push(Node::new(id, pos.0, pos.1).with_size(size.0, size.1));
        self
    }

    pub fn with_output(mut self, pin: PinId, node: NodeId) -> Self {
        self.pins.push(Pin::output(pin, node));
        self
    }

    pub fn with_input(mut self, pin: PinId, node: NodeId) -> Self {
        self.pins.push(Pin::input(pin, node));
        self
    }

    /// A pin with no declared kind.
    pub fn with_pin(mut self, pin: PinId, node: NodeId) -> Self {
        self.pins.push(Pin::new(pin, node));
        self
    }

    pub fn with_edge(mut self, from: NodeId, output: PinId, to: NodeId, input: PinId) -> Self {
        self.edges.push(Edge::new(from, output, to, input));
        self
    }

    /// Screen-space origin of the canvas.
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.viewport.start_x = x;
        self.viewport.start_y = y;
        self
    }

    pub fn build(self) -> GraphState {
        GraphState::new(EditorState::new(self.nodes, self.pins, self.edges))
            .with_viewport(self.viewport)
    }
}

/// Two nodes side by side: node 1 (output 10, input 11) at the origin and
/// node 2 (input 20, output 21) at x = 300, both 100x50.
pub fn two_node_graph() -> GraphState {
    TestGraphBuilder::new()
        .with_node(1, (0.0, 0.0), (100.0, 50.0))
        .with_node(2, (300.0, 0.0), (100.0, 50.0))
        .with_output(10, 1)
        .with_input(11, 1)
        .with_input(20, 2)
        .with_output(21, 2)
        .build()
}

/// A 3x3 grid of 40x40 nodes spaced 100 apart, ids 1..=9 row by row.
pub fn grid_graph() -> GraphState {
    let mut builder = TestGraphBuilder::new();
    for row in 0..3u64 {
        for col in 0..3u64 {
            builder = builder.with_node(
                row * 3 + col + 1,
                (col as f32 * 100.0, row as f32 * 100.0),
                (40.0, 40.0),
            );
        }
    }
    builder.build()
}

// ============================================================================
// Editor Setup
// ============================================================================

pub fn editor_with(state: GraphState) -> (GraphEditor, ManualFrameClock, Recorder) {
    editor_with_config(state, EditorConfig::default())
}

pub fn editor_with_config(
    state: GraphState,
    config: EditorConfig,
) -> (GraphEditor, ManualFrameClock, Recorder) {
    let clock = ManualFrameClock::new();
    let editor = GraphEditor::with_config(state, clock.clone(), config);
    let recorder = Recorder::attach(&editor);
    (editor, clock, recorder)
}

/// Observer that records every committed snapshot.
#[derive(Clone, Default)]
pub struct Recorder {
    snapshots: Arc<Mutex<Vec<GraphState>>>,
}

impl Recorder {
    pub fn attach(editor: &GraphEditor) -> Self {
        let recorder = Self::default();
        let sink = Arc::clone(&recorder.snapshots);
        editor.subscribe(move |state| sink.lock().push(state.clone()));
        recorder
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().len()
    }

    pub fn last(&self) -> Option<GraphState> {
        self.snapshots.lock().last().cloned()
    }

    pub fn all(&self) -> Vec<GraphState> {
        self.snapshots.lock().clone()
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

pub fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(x, y, ButtonMask::PRIMARY)
}

pub fn press_with(buttons: ButtonMask, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(x, y, buttons)
}

pub fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(x, y, ButtonMask::PRIMARY)
}

pub fn release(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(x, y, ButtonMask::NONE)
}

pub fn context_click(x: f32, y: f32, modifiers: Modifiers) -> PointerEvent {
    PointerEvent::new(x, y, ButtonMask::SECONDARY).with_modifiers(modifiers)
}

// ============================================================================
// Assertions
// ============================================================================

/// `down == 0` implies no gesture-specific fields.
pub fn assert_idle_invariant(state: &GraphState) {
    let mouse = &state.mouse_state;
    if mouse.down().is_empty() {
        assert!(mouse.is_idle(), "empty button mask outside Idle: {mouse:?}");
        assert!(!mouse.dragging_edge());
        assert_eq!(mouse.node(), None);
        assert_eq!(mouse.pin(), None);
        assert_eq!(mouse.rect(), None);
    }
    if mouse.dragging_edge() {
        assert!(mouse.node().is_some() && mouse.pin().is_some());
    }
}

pub fn selection_of(state: &GraphState) -> Vec<NodeId> {
    state.selection().iter().copied().collect()
}
