//! Render-side queries: anchors, overlays, hit testing.

use crate::helpers::*;
use graphboard::{ButtonMask, DragOverlay, GraphPoint, Rect};

#[test]
fn test_node_at_follows_pan() {
    let state = TestGraphBuilder::new()
        .with_node(1, (0.0, 0.0), (100.0, 100.0))
        .with_node(2, (50.0, 50.0), (100.0, 100.0))
        .build();

    assert_eq!(state.node_at(GraphPoint::new(75.0, 75.0)), Some(2));
    assert_eq!(state.node_at(GraphPoint::new(10.0, 10.0)), Some(1));
    assert_eq!(state.node_at(GraphPoint::new(500.0, 500.0)), None);

    // Panning moves the content under a fixed pointer
    let panned = state.pan_by(-50.0, -50.0);
    assert_eq!(panned.node_at(GraphPoint::new(10.0, 10.0)), Some(2));
}

#[test]
fn test_visible_edges_skip_missing_endpoints() {
    let state = TestGraphBuilder::new()
        .with_node(1, (0.0, 0.0), (10.0, 10.0))
        .with_node(2, (50.0, 0.0), (10.0, 10.0))
        .with_output(10, 1)
        .with_input(20, 2)
        .with_edge(1, 10, 2, 20)
        .with_edge(1, 10, 3, 30)
        .build();

    let visible: Vec<_> = state.visible_edges().map(|edge| edge.to).collect();
    assert_eq!(visible, vec![2]);
}

#[test]
fn test_selection_box_overlay() {
    let state = grid_graph()
        .pan_by(10.0, 0.0)
        .start_mouse(ButtonMask::PRIMARY, 0.0, 0.0)
        .update_mouse(30.0, 20.0);

    assert_eq!(
        state.drag_overlay(),
        Some(DragOverlay::SelectionBox(Rect::spanning(
            GraphPoint::new(-10.0, 0.0),
            GraphPoint::new(20.0, 20.0),
        )))
    );

    let panning = grid_graph().start_mouse(ButtonMask::SECONDARY, 0.0, 0.0);
    assert_eq!(panning.drag_overlay(), None);
    assert_eq!(grid_graph().drag_overlay(), None);
}

#[test]
fn test_connection_line_overlay() {
    let state = two_node_graph()
        .start_mouse(ButtonMask::PRIMARY, 100.0, 0.0)
        .start_connection(1, 10)
        .update_mouse(180.0, 40.0);

    match state.drag_overlay() {
        Some(DragOverlay::ConnectionLine { from, to, .. }) => {
            assert_eq!(from, GraphPoint::new(100.0, 0.0));
            assert_eq!(to, GraphPoint::new(180.0, 40.0));
        }
        other => panic!("expected connection line, got {other:?}"),
    }
}

#[test]
fn test_selected_nodes() {
    let state = grid_graph().select_nodes([3, 7, 42]);
    let ids: Vec<_> = state.selected_nodes().map(|node| node.id).collect();
    assert_eq!(ids, vec![3, 7]);
}
