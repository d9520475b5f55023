//! Pointer-down handling: canvas gestures, connection drags, context menu.
//!
//! Each handler returns `true` when it consumed the event; the host should
//! then prevent the default action and stop propagation.

use super::coords::CoordinateConverter;
use super::pointer::{PointerEvent, PointerTarget};
use crate::editor::GraphEditor;
use crate::profile_scope;
use crate::types::{NodeId, PinId};

impl GraphEditor {
    /// Pointer-down on the canvas (or bubbled up from a node widget).
    /// A press on empty canvas closes any open menu first. A press with no
    /// buttons that has no menu to close is ignored.
    pub fn handle_mouse_down(&self, event: &PointerEvent) -> bool {
        profile_scope!("handle_mouse_down");

        self.commit(|state, _| {
            if event.buttons.is_empty()
                && (!state.menu_state.open || event.target == PointerTarget::Widget)
            {
                return None;
            }
            let point = CoordinateConverter::to_graph_coords(event, &state.viewport);
            let state = match event.target {
                PointerTarget::Canvas => state.close_menu(),
                PointerTarget::Widget => state.clone(),
            };
            Some(state.start_mouse(event.buttons, point.x, point.y))
        })
    }

    /// Pointer-down on a pin widget: start dragging a connection out of it.
    /// Ignored while a connection drag is already in flight, or when no
    /// button is down.
    pub fn handle_pin_mouse_down(&self, node: NodeId, pin: PinId, event: &PointerEvent) -> bool {
        profile_scope!("handle_pin_mouse_down");

        self.commit(|state, _| {
            if event.buttons.is_empty() || state.mouse_state.dragging_edge() {
                return None;
            }
            let point = CoordinateConverter::to_graph_coords(event, &state.viewport);
            Some(
                state
                    .start_mouse(event.buttons, point.x, point.y)
                    .start_connection(node, pin),
            )
        })
    }

    /// Context-menu event on the canvas. Returns `false` when the event is
    /// left to the host's native menu (Shift held with the debug escape
    /// hatch enabled).
    pub fn handle_context_menu(&self, event: &PointerEvent) -> bool {
        profile_scope!("handle_context_menu");

        self.commit(|state, config| {
            if config.native_context_menu_modifier && event.modifiers.shift {
                return None;
            }
            let point = CoordinateConverter::to_graph_coords(event, &state.viewport);
            Some(state.open_menu(point.x, point.y))
        })
    }
}
