//! Coordinate conversion for pointer events.
//!
//! Graph-local coordinates are client coordinates minus the canvas origin.
//! Pan translation is applied at render time and is not folded in here.

use super::pointer::PointerEvent;
use crate::state::Viewport;
use crate::types::GraphPoint;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer event to graph-local coordinates
    #[inline]
    pub fn to_graph_coords(event: &PointerEvent, viewport: &Viewport) -> GraphPoint {
        GraphPoint::new(
            event.client_x - viewport.start_x,
            event.client_y - viewport.start_y,
        )
    }

    /// Convert graph-local coordinates to content coordinates (undo the pan)
    #[inline]
    pub fn graph_to_content(point: GraphPoint, viewport: &Viewport) -> GraphPoint {
        GraphPoint::new(point.x - viewport.translate_x, point.y - viewport.translate_y)
    }

    /// Convert content coordinates back to graph-local coordinates
    #[inline]
    pub fn content_to_graph(point: GraphPoint, viewport: &Viewport) -> GraphPoint {
        GraphPoint::new(point.x + viewport.translate_x, point.y + viewport.translate_y)
    }
}
