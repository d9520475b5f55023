//! Pointer move and node drag handling.
//!
//! ## Performance Notes
//!
//! Both handlers fire at pointer-event rate. They run one transition and
//! clone only the collection they write to.

use super::coords::CoordinateConverter;
use super::pointer::PointerEvent;
use crate::editor::GraphEditor;
use crate::profile_scope;
use crate::types::NodeId;

impl GraphEditor {
    /// Pointer move over the canvas. Only acts while a button is down.
    pub fn handle_mouse_move(&self, event: &PointerEvent) -> bool {
        profile_scope!("handle_mouse_move");

        self.commit(|state, _| {
            if !state.mouse_state.is_down() {
                return None;
            }
            let point = CoordinateConverter::to_graph_coords(event, &state.viewport);
            Some(state.update_mouse(point.x, point.y))
        })
    }

    /// A node widget moved its node. `is_final` marks the end of the drag;
    /// final positions snap to the configured grid.
    pub fn handle_node_move(&self, id: NodeId, x: f32, y: f32, is_final: bool) -> bool {
        profile_scope!("handle_node_move");

        self.commit(|state, config| {
            let (x, y) = if is_final { config.snap(x, y) } else { (x, y) };
            Some(state.move_node(id, x, y, is_final))
        })
    }
}
