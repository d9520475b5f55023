//! Pointer-up handling: finish gestures, drop connections, click-select.

use super::coords::CoordinateConverter;
use super::pointer::PointerEvent;
use crate::editor::GraphEditor;
use crate::profile_scope;
use crate::types::{NodeId, PinId};
use tracing::debug;

impl GraphEditor {
    /// Pointer-up on the canvas. Ends whatever gesture is in flight; a
    /// connection released here (not on a pin) opens the menu at the
    /// release point so the host can offer to create a node there. The menu
    /// only carries the connection while its origin pin still exists. A
    /// release with no gesture in flight is ignored.
    pub fn handle_mouse_up(&self, event: &PointerEvent) -> bool {
        profile_scope!("handle_mouse_up");

        self.commit(|state, _| {
            if !state.mouse_state.is_down() {
                return None;
            }

            let released = state.end_mouse();
            let Some(origin) = state.mouse_state.origin() else {
                return Some(released);
            };

            let point = CoordinateConverter::to_graph_coords(event, &state.viewport);
            if state.is_valid_pin(origin.node, origin.pin) {
                Some(released.open_connection_menu(point.x, point.y, origin))
            } else {
                debug!(
                    origin_node = origin.node,
                    origin_pin = origin.pin,
                    "connection origin vanished, opening plain menu"
                );
                Some(released.open_menu(point.x, point.y))
            }
        })
    }

    /// Pointer-up on a pin widget: the drop target of a connection drag.
    pub fn handle_pin_mouse_up(&self, node: NodeId, pin: PinId) -> bool {
        profile_scope!("handle_pin_mouse_up");

        self.commit(|state, _| {
            if !state.mouse_state.dragging_edge() {
                return None;
            }
            Some(state.end_connection(node, pin))
        })
    }

    /// Click on a node widget. Clicking an already selected node changes
    /// nothing; otherwise the menu closes and the node is selected,
    /// `additive` keeping the rest of the selection.
    pub fn handle_node_click(&self, id: NodeId, additive: bool) -> bool {
        self.commit(|state, _| {
            if state.is_selected(id) {
                return None;
            }
            Some(state.close_menu().select_node(id, additive))
        })
    }
}
