//! Editor state transition contract.
//!
//! Every function here maps a snapshot (plus arguments) to a new snapshot.
//! None of them mutate `self`, none have side effects beyond logging, and
//! all of them accept stale ids: an id that is no longer in the document
//! leaves the snapshot unchanged.

use super::{GraphState, MenuState};
use crate::input::{ButtonMask, MouseState};
use crate::spatial_index::SpatialIndex;
use crate::types::{Edge, GraphPoint, NodeId, PinId, PinKind, PinRef, Rect};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

impl GraphState {
    // ========================================================================
    // Menu
    // ========================================================================

    pub fn close_menu(&self) -> Self {
        if !self.menu_state.open {
            return self.clone();
        }
        Self {
            menu_state: MenuState::default(),
            ..self.clone()
        }
    }

    pub fn open_menu(&self, x: f32, y: f32) -> Self {
        Self {
            menu_state: MenuState::at(x, y),
            ..self.clone()
        }
    }

    /// Open the menu for a connection dropped on empty canvas, remembering
    /// where the connection came from.
    pub fn open_connection_menu(&self, x: f32, y: f32, origin: PinRef) -> Self {
        Self {
            menu_state: MenuState {
                connection: Some(origin),
                ..MenuState::at(x, y)
            },
            ..self.clone()
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select a node. `additive` unions it into the selection, otherwise the
    /// selection becomes exactly `{id}`.
    pub fn select_node(&self, id: NodeId, additive: bool) -> Self {
        if !self.editor_state.nodes.contains_key(&id) {
            debug!(node_id = id, "select_node: unknown node, ignoring");
            return self.clone();
        }

        let mut next = self.clone();
        let selection = Arc::make_mut(&mut next.editor_state.selection);
        if !additive {
            selection.clear();
        }
        selection.insert(id);
        next
    }

    /// Replace the selection with the given nodes, dropping unknown ids.
    pub fn select_nodes(&self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let selection: BTreeSet<NodeId> = ids
            .into_iter()
            .filter(|id| self.editor_state.nodes.contains_key(id))
            .collect();

        if selection == *self.editor_state.selection {
            return self.clone();
        }

        let mut next = self.clone();
        next.editor_state.selection = Arc::new(selection);
        next
    }

    /// Select every node whose bounding box overlaps `rect` (content
    /// coordinates, inclusive boundaries).
    pub fn select_in_rect(&self, rect: Rect) -> Self {
        let index = SpatialIndex::from_nodes(self.editor_state.nodes.values());
        self.select_nodes(index.query_rect(&rect))
    }

    // ========================================================================
    // Node Movement
    // ========================================================================

    /// Move a node. Non-final moves mark the node as dragging; the final
    /// move clears the flag.
    pub fn move_node(&self, id: NodeId, x: f32, y: f32, is_final: bool) -> Self {
        if !self.editor_state.nodes.contains_key(&id) {
            debug!(node_id = id, is_final, "move_node: unknown node, ignoring");
            return self.clone();
        }

        let mut next = self.clone();
        if let Some(node) = Arc::make_mut(&mut next.editor_state.nodes).get_mut(&id) {
            node.x = x;
            node.y = y;
            node.dragging = !is_final;
        }
        next
    }

    // ========================================================================
    // Pointer Gesture
    // ========================================================================

    /// Begin a canvas gesture at graph-local `(x, y)`.
    pub fn start_mouse(&self, buttons: ButtonMask, x: f32, y: f32) -> Self {
        Self {
            mouse_state: MouseState::pressed(buttons, x, y),
            ..self.clone()
        }
    }

    /// Track the pointer. Box-select stretches the rubber band from the
    /// anchor, panning translates the viewport by the pointer delta, and a
    /// connection drag moves the line endpoint. Idle is a no-op.
    pub fn update_mouse(&self, x: f32, y: f32) -> Self {
        match &self.mouse_state {
            MouseState::Idle => self.clone(),
            MouseState::Pressed {
                buttons,
                anchor,
                x: last_x,
                y: last_y,
                ..
            } => {
                let mut next = self.clone();
                if !buttons.is_primary_only() {
                    next.viewport.translate_x += x - last_x;
                    next.viewport.translate_y += y - last_y;
                }
                next.mouse_state = MouseState::Pressed {
                    buttons: *buttons,
                    anchor: *anchor,
                    x,
                    y,
                    rect: Rect::spanning(*anchor, GraphPoint::new(x, y)),
                };
                next
            }
            MouseState::Connecting {
                buttons, origin, ..
            } => Self {
                mouse_state: MouseState::Connecting {
                    buttons: *buttons,
                    x,
                    y,
                    origin: *origin,
                },
                ..self.clone()
            },
        }
    }

    /// Finish the gesture. A non-trivial box-select replaces the selection
    /// with the nodes under the rubber band; a single-point press (a click
    /// on empty canvas) leaves the selection alone.
    pub fn end_mouse(&self) -> Self {
        let released = Self {
            mouse_state: MouseState::Idle,
            ..self.clone()
        };

        match &self.mouse_state {
            MouseState::Idle => self.clone(),
            MouseState::Pressed { buttons, rect, .. }
                if buttons.is_primary_only() && !rect.is_point() =>
            {
                let content = rect.translated(-self.viewport.translate_x, -self.viewport.translate_y);
                released.select_in_rect(content)
            }
            MouseState::Pressed { .. } | MouseState::Connecting { .. } => released,
        }
    }

    // ========================================================================
    // Connections
    // ========================================================================

    /// Turn the pressed gesture into a connection drag from `(node, pin)`.
    /// Needs a button down; an unknown origin abandons the gesture.
    pub fn start_connection(&self, node: NodeId, pin: PinId) -> Self {
        let (buttons, x, y) = match &self.mouse_state {
            MouseState::Idle => {
                debug!(node_id = node, pin_id = pin, "start_connection: no button down, ignoring");
                return self.clone();
            }
            MouseState::Pressed { buttons, x, y, .. }
            | MouseState::Connecting { buttons, x, y, .. } => (*buttons, *x, *y),
        };

        if !self.is_valid_pin(node, pin) {
            debug!(node_id = node, pin_id = pin, "start_connection: unknown origin pin, dropping gesture");
            return Self {
                mouse_state: MouseState::Idle,
                ..self.clone()
            };
        }

        Self {
            mouse_state: MouseState::Connecting {
                buttons,
                x,
                y,
                origin: PinRef::new(node, pin),
            },
            ..self.clone()
        }
    }

    /// Drop the dragged connection on `(node, pin)`. Always ends the drag;
    /// appends an edge only when the drop makes a valid new connection.
    pub fn end_connection(&self, node: NodeId, pin: PinId) -> Self {
        let Some(origin) = self.mouse_state.origin() else {
            return self.clone();
        };

        let mut next = Self {
            mouse_state: MouseState::Idle,
            ..self.clone()
        };

        match self.resolve_edge(origin, PinRef::new(node, pin)) {
            Some(edge) => Arc::make_mut(&mut next.editor_state.edges).push(edge),
            None => debug!(
                origin_node = origin.node,
                origin_pin = origin.pin,
                target_node = node,
                target_pin = pin,
                "end_connection: no valid connection, discarding"
            ),
        }
        next
    }

    /// The edge a drop would create: the origin pin is the output, the drop
    /// pin the input. Rejects the same pin, vanished pins, pins whose
    /// declared kinds do not run output to input, and connections that
    /// already exist.
    pub fn resolve_edge(&self, origin: PinRef, target: PinRef) -> Option<Edge> {
        if origin.pin == target.pin {
            return None;
        }
        if !self.is_valid_pin(origin.node, origin.pin) || !self.is_valid_pin(target.node, target.pin) {
            return None;
        }

        let origin_pin = self.pin(origin.pin)?;
        let target_pin = self.pin(target.pin)?;
        if let (Some(from), Some(to)) = (origin_pin.kind, target_pin.kind) {
            if from != PinKind::Output || to != PinKind::Input {
                return None;
            }
        }

        let mut edge = Edge::new(origin.node, origin.pin, target.node, target.pin);
        if let Some(color) = &origin_pin.color {
            edge.color = color.clone();
        }

        if self.editor_state.edges.iter().any(|existing| existing.connects(&edge)) {
            return None;
        }
        Some(edge)
    }

    /// `pin` exists and belongs to `node`, which exists.
    pub(crate) fn is_valid_pin(&self, node: NodeId, pin: PinId) -> bool {
        self.editor_state.nodes.contains_key(&node)
            && self.pin(pin).is_some_and(|p| p.node == node)
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn measure_viewport(&self, width: f32, height: f32) -> Self {
        let mut next = self.clone();
        next.viewport.width = width;
        next.viewport.height = height;
        next
    }

    /// Record the canvas origin in screen space.
    pub fn locate_viewport(&self, start_x: f32, start_y: f32) -> Self {
        let mut next = self.clone();
        next.viewport.start_x = start_x;
        next.viewport.start_y = start_y;
        next
    }

    pub fn pan_by(&self, dx: f32, dy: f32) -> Self {
        let mut next = self.clone();
        next.viewport.translate_x += dx;
        next.viewport.translate_y += dy;
        next
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    pub fn measure_node(&self, id: NodeId, width: f32, height: f32) -> Self {
        let Some(node) = self.editor_state.nodes.get(&id) else {
            debug!(node_id = id, "measure_node: unknown node, ignoring");
            return self.clone();
        };
        if node.width == width && node.height == height {
            return self.clone();
        }

        let mut next = self.clone();
        if let Some(node) = Arc::make_mut(&mut next.editor_state.nodes).get_mut(&id) {
            node.width = width;
            node.height = height;
        }
        next
    }

    /// Record a pin's vertical offset and height, then refresh the owner's
    /// `min_pin` from its measured pins.
    pub fn measure_pin(&self, id: PinId, y: f32, height: f32) -> Self {
        let Some(pin) = self.editor_state.pins.get(&id) else {
            debug!(pin_id = id, "measure_pin: unknown pin, ignoring");
            return self.clone();
        };
        if pin.offset_y == Some(y) && pin.height == height {
            return self.clone();
        }
        let owner = pin.node;

        let mut next = self.clone();
        if let Some(pin) = Arc::make_mut(&mut next.editor_state.pins).get_mut(&id) {
            pin.offset_y = Some(y);
            pin.height = height;
        }

        if let Some(min_pin) = next.min_pin_offset(owner) {
            let stale = next.node(owner).is_some_and(|node| node.min_pin != min_pin);
            if stale {
                if let Some(node) = Arc::make_mut(&mut next.editor_state.nodes).get_mut(&owner) {
                    node.min_pin = min_pin;
                }
            }
        }
        next
    }

    fn min_pin_offset(&self, node: NodeId) -> Option<f32> {
        self.node(node)?
            .pins
            .iter()
            .filter_map(|id| self.pin(*id))
            .filter_map(|pin| pin.offset_y)
            .reduce(f32::min)
    }
}
