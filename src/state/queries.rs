//! Read-only views over a snapshot for the render layer.

use super::GraphState;
use crate::constants::DRAG_LINE_COLOR;
use crate::input::{CoordinateConverter, MouseState};
use crate::spatial_index::SpatialIndex;
use crate::types::{Edge, GraphPoint, Node, NodeId, PinId, PinKind, Rect};

/// What to draw for the gesture in flight, in content coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DragOverlay {
    /// Rubber band of a box-select
    SelectionBox(Rect),
    /// Line from the origin pin to the pointer
    ConnectionLine {
        from: GraphPoint,
        to: GraphPoint,
        color: &'static str,
    },
}

impl GraphState {
    /// Where a pin attaches in content coordinates: the node's left edge
    /// for inputs, right edge for outputs and untyped pins, at the pin's
    /// vertical center.
    pub fn pin_anchor(&self, id: PinId) -> Option<GraphPoint> {
        let pin = self.pin(id)?;
        let node = self.node(pin.node)?;
        let x = match pin.kind {
            Some(PinKind::Input) => node.x,
            Some(PinKind::Output) | None => node.x + node.width,
        };
        Some(GraphPoint::new(x, node.y + pin.center_offset()))
    }

    /// Edges whose both endpoint nodes are still present.
    pub fn visible_edges(&self) -> impl Iterator<Item = &Edge> {
        self.editor_state.edges.iter().filter(|edge| {
            self.editor_state.nodes.contains_key(&edge.from)
                && self.editor_state.nodes.contains_key(&edge.to)
        })
    }

    pub fn selected_nodes(&self) -> impl Iterator<Item = &Node> {
        self.editor_state
            .selection
            .iter()
            .filter_map(|id| self.editor_state.nodes.get(id))
    }

    /// Topmost node under a graph-local point. Later nodes render on top.
    pub fn node_at(&self, point: GraphPoint) -> Option<NodeId> {
        let content = CoordinateConverter::graph_to_content(point, &self.viewport);
        let index = SpatialIndex::from_nodes(self.editor_state.nodes.values());
        index
            .query_point(content.x, content.y)
            .into_iter()
            .max_by_key(|id| self.editor_state.nodes.get_index_of(id))
    }

    /// Overlay for the primary-button gesture in flight. Panning draws
    /// nothing.
    pub fn drag_overlay(&self) -> Option<DragOverlay> {
        match &self.mouse_state {
            MouseState::Pressed { buttons, rect, .. } if buttons.is_primary_only() => {
                Some(DragOverlay::SelectionBox(rect.translated(
                    -self.viewport.translate_x,
                    -self.viewport.translate_y,
                )))
            }
            MouseState::Connecting { x, y, origin, .. } => {
                let from = self.pin_anchor(origin.pin)?;
                let to = CoordinateConverter::graph_to_content(GraphPoint::new(*x, *y), &self.viewport);
                Some(DragOverlay::ConnectionLine {
                    from,
                    to,
                    color: DRAG_LINE_COLOR,
                })
            }
            _ => None,
        }
    }
}
