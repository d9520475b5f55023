//! Context menu and node click handling.

use crate::helpers::*;
use graphboard::{EditorConfig, Modifiers};

fn config(native_context_menu_modifier: bool) -> EditorConfig {
    EditorConfig {
        native_context_menu_modifier,
        ..Default::default()
    }
}

#[test]
fn test_context_menu_opens_at_pointer() {
    let state = TestGraphBuilder::new().with_origin(20.0, 10.0).build();
    let (editor, _clock, recorder) = editor_with_config(state, config(true));

    assert!(editor.handle_context_menu(&context_click(70.0, 40.0, Modifiers::NONE)));

    let menu = editor.state().menu_state;
    assert!(menu.open);
    assert_eq!((menu.x, menu.y), (50.0, 30.0));
    assert_eq!(menu.connection, None);
    assert_eq!(recorder.count(), 1);
}

#[test]
fn test_shift_context_menu_left_to_host() {
    let (editor, _clock, recorder) = editor_with_config(two_node_graph(), config(true));

    assert!(!editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::shift())));
    assert!(!editor.state().menu_state.open);
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_shift_context_menu_without_escape_hatch() {
    let (editor, _clock, _recorder) = editor_with_config(two_node_graph(), config(false));

    assert!(editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::shift())));
    assert!(editor.state().menu_state.open);
}

#[test]
fn test_canvas_press_closes_menu() {
    let (editor, _clock, _recorder) = editor_with(two_node_graph());
    editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::NONE));

    editor.handle_mouse_down(&press(200.0, 200.0));
    assert!(!editor.state().menu_state.open);
}

#[test]
fn test_press_bubbled_from_widget_keeps_menu() {
    let (editor, _clock, _recorder) = editor_with(two_node_graph());
    editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::NONE));

    editor.handle_mouse_down(&press(200.0, 200.0).on_widget());
    let state = editor.state();
    assert!(state.menu_state.open);
    assert!(state.mouse_state.is_down());
}

#[test]
fn test_node_click_selects_and_closes_menu() {
    let (editor, _clock, _recorder) = editor_with(two_node_graph());
    editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::NONE));

    assert!(editor.handle_node_click(2, false));

    let state = editor.state();
    assert_eq!(selection_of(&state), vec![2]);
    assert!(!state.menu_state.open);
}

#[test]
fn test_node_click_replaces_or_extends_selection() {
    let (editor, _clock, _recorder) = editor_with(two_node_graph());

    editor.handle_node_click(1, false);
    editor.handle_node_click(2, false);
    assert_eq!(selection_of(&editor.state()), vec![2]);

    editor.handle_node_click(1, true);
    assert_eq!(selection_of(&editor.state()), vec![1, 2]);
}

#[test]
fn test_click_on_selected_node_is_ignored() {
    let (editor, _clock, recorder) = editor_with(two_node_graph());
    editor.handle_node_click(1, false);
    editor.handle_context_menu(&context_click(5.0, 5.0, Modifiers::NONE));

    assert!(!editor.handle_node_click(1, false));

    // Menu stays open: the click did not apply
    assert!(editor.state().menu_state.open);
    assert_eq!(recorder.count(), 2);
}

#[test]
fn test_click_on_unknown_node_keeps_selection() {
    let (editor, _clock, _recorder) = editor_with(two_node_graph());
    editor.handle_node_click(1, false);

    editor.handle_node_click(99, false);
    assert_eq!(selection_of(&editor.state()), vec![1]);
}
