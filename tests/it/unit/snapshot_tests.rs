//! Serialized and debug shapes of snapshot pieces hosts persist or log.

use crate::helpers::*;
use graphboard::{ButtonMask, Edge, GraphState, MouseState, PinRef};

#[test]
fn test_edge_json_shape() {
    insta::assert_json_snapshot!(Edge::new(1, 10, 2, 20), @r###"
    {
      "from": 1,
      "to": 2,
      "output": 10,
      "input": 20,
      "color": "#ffffff"
    }
    "###);
}

#[test]
fn test_idle_mouse_state_json_shape() {
    insta::assert_json_snapshot!(MouseState::Idle, @r###"
    {
      "mode": "idle"
    }
    "###);
}

#[test]
fn test_selection_after_box_select() {
    let state = grid_graph()
        .start_mouse(ButtonMask::PRIMARY, 90.0, 90.0)
        .update_mouse(210.0, 110.0)
        .end_mouse();

    insta::assert_json_snapshot!(state.selection(), @r###"
    [
      5,
      6
    ]
    "###);
}

#[test]
fn test_connection_menu_debug_shape() {
    let state = two_node_graph().open_connection_menu(50.0, 50.0, PinRef::new(1, 10));

    insta::assert_debug_snapshot!(state.menu_state, @r###"
    MenuState {
        open: true,
        x: 50.0,
        y: 50.0,
        connection: Some(
            PinRef {
                node: 1,
                pin: 10,
            },
        ),
    }
    "###);
}

#[test]
fn test_graph_state_survives_json() {
    let state = two_node_graph()
        .select_node(2, false)
        .start_mouse(ButtonMask::PRIMARY, 100.0, 25.0)
        .start_connection(1, 10);

    let json = serde_json::to_string(&state).unwrap();
    let restored: GraphState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, state);
    assert_eq!(restored.mouse_state.origin(), Some(PinRef::new(1, 10)));
}
