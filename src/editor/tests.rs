//! Interaction scenarios driven through the editor's event handlers.
//!
//! `update_frame` stands in for the render tick the host runs between events.

use regionmark_ui::{Event, Key, Point};

use super::EditorState;
use crate::keybindings::{Direction, EditorAction};
use crate::model::{EditMode, RegionId};

fn click(editor: &mut EditorState, p: Point) {
    editor.pointer_moved(p);
    editor.update_frame();
    editor.pointer_pressed();
    editor.update_frame();
    editor.pointer_released();
    editor.update_frame();
}

/// Two clicks followed by the double-click event, as a browser delivers them.
fn double_click(editor: &mut EditorState, p: Point) {
    click(editor, p);
    click(editor, p);
    editor.double_clicked(p);
    editor.update_frame();
}

fn square(editor: &mut EditorState, origin: Point, size: f32) -> RegionId {
    editor.add_region([
        origin,
        origin.offset(size, 0.0),
        origin.offset(size, size),
        origin.offset(0.0, size),
    ])
}

#[test]
fn test_click_on_empty_canvas_starts_region() {
    let mut editor = EditorState::new();
    editor.pointer_moved(Point::new(30.0, 40.0));
    editor.pointer_pressed();
    editor.pointer_released();

    let region = editor.in_progress().expect("drawing started");
    assert_eq!(region.len(), 1);
    assert_eq!(region.nodes()[0].position(), Point::new(30.0, 40.0));
    assert!(!region.is_closed());
    assert!(editor.regions().is_empty());
}

#[test]
fn test_draw_and_commit_square() {
    let mut editor = EditorState::new();
    click(&mut editor, Point::new(100.0, 100.0));
    click(&mut editor, Point::new(200.0, 100.0));
    click(&mut editor, Point::new(200.0, 200.0));
    assert_eq!(editor.in_progress().map(|r| r.len()), Some(3));

    double_click(&mut editor, Point::new(100.0, 200.0));

    assert!(editor.in_progress().is_none());
    assert_eq!(editor.regions().len(), 1);
    let region = &editor.regions()[0];
    assert!(region.is_closed());
    assert_eq!(
        region.points(),
        vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 200.0),
        ]
    );
}

#[test]
fn test_commit_triangle() {
    let mut editor = EditorState::new();
    click(&mut editor, Point::new(0.0, 0.0));
    click(&mut editor, Point::new(50.0, 0.0));
    double_click(&mut editor, Point::new(0.0, 50.0));

    assert_eq!(editor.regions().len(), 1);
    assert_eq!(editor.regions()[0].len(), 3);
}

#[test]
fn test_closing_with_too_few_nodes_is_rejected() {
    let mut editor = EditorState::new();
    click(&mut editor, Point::new(0.0, 0.0));
    double_click(&mut editor, Point::new(50.0, 0.0));

    assert!(editor.regions().is_empty());
    assert!(editor.in_progress().is_none());
}

#[test]
fn test_highlight_is_skipped_while_drawing() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);

    editor.pointer_moved(Point::new(50.0, 50.0));
    editor.update_frame();
    assert_eq!(editor.highlighted(), Some(id));

    click(&mut editor, Point::new(300.0, 300.0));
    assert!(editor.is_drawing());

    // Clicking over the existing region adds a node instead of selecting it
    click(&mut editor, Point::new(50.0, 50.0));
    assert_eq!(editor.highlighted(), None);
    assert_eq!(editor.selected(), None);
    assert_eq!(editor.in_progress().map(|r| r.len()), Some(2));
}

#[test]
fn test_topmost_region_is_highlighted() {
    let mut editor = EditorState::new();
    square(&mut editor, Point::new(0.0, 0.0), 100.0);
    let top = square(&mut editor, Point::new(50.0, 50.0), 100.0);

    editor.pointer_moved(Point::new(75.0, 75.0));
    editor.update_frame();
    assert_eq!(editor.highlighted(), Some(top));

    editor.pointer_moved(Point::new(500.0, 500.0));
    editor.update_frame();
    assert_eq!(editor.highlighted(), None);
}

#[test]
fn test_press_selects_highlighted_region() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);

    click(&mut editor, Point::new(50.0, 50.0));
    assert_eq!(editor.selected(), Some(id));
    assert!(!editor.is_drawing());
}

#[test]
fn test_deselect_swallows_release() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    click(&mut editor, Point::new(50.0, 50.0));
    assert_eq!(editor.selected(), Some(id));

    click(&mut editor, Point::new(400.0, 400.0));
    assert_eq!(editor.selected(), None);
    assert!(!editor.is_drawing());

    // The next click on empty canvas draws again
    click(&mut editor, Point::new(400.0, 400.0));
    assert!(editor.is_drawing());
}

#[test]
fn test_region_move_drag() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    click(&mut editor, Point::new(50.0, 50.0));

    editor.pointer_pressed();
    editor.update_frame();
    assert_eq!(
        editor.region(id).map(|r| r.edit_mode()),
        Some(EditMode::RegionMove {
            anchor: Point::new(50.0, 50.0)
        })
    );

    editor.pointer_moved(Point::new(53.0, 54.0));
    editor.update_frame();
    editor.pointer_moved(Point::new(53.0, 54.0));
    editor.update_frame();
    editor.pointer_released();
    editor.update_frame();

    let region = editor.region(id).expect("region");
    assert_eq!(region.nodes()[0].position(), Point::new(3.0, 4.0));
    assert_eq!(region.nodes()[2].position(), Point::new(103.0, 104.0));
    assert_eq!(region.edit_mode(), EditMode::Idle);
}

#[test]
fn test_node_drag() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    click(&mut editor, Point::new(50.0, 50.0));

    editor.pointer_moved(Point::new(100.0, 100.0));
    editor.update_frame();
    editor.pointer_pressed();
    editor.update_frame();
    editor.pointer_moved(Point::new(140.0, 120.0));
    editor.update_frame();
    editor.update_frame();
    editor.pointer_released();
    editor.update_frame();

    let region = editor.region(id).expect("region");
    assert_eq!(region.nodes()[2].position(), Point::new(140.0, 120.0));
    assert_eq!(region.nodes()[0].position(), Point::new(0.0, 0.0));
    assert_eq!(region.selected_node(), None);
    // The dragged node sits under the cursor, so the release is not a draw click
    assert!(!editor.is_drawing());
}

#[test]
fn test_double_click_inserts_node_on_selected_region() {
    let mut editor = EditorState::new();
    let id = editor.add_region([
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    editor.select(Some(id));

    editor.double_clicked(Point::new(5.0, 0.0));
    let region = editor.region(id).expect("region");
    assert_eq!(region.len(), 5);
    assert_eq!(region.nodes()[1].position(), Point::new(5.0, 0.0));
}

#[test]
fn test_double_click_node_removes_collapsed_region() {
    let mut editor = EditorState::new();
    let triangle = editor.add_region([
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(0.0, 50.0),
    ]);
    let other = square(&mut editor, Point::new(200.0, 200.0), 50.0);

    click(&mut editor, Point::new(10.0, 10.0));
    assert_eq!(editor.selected(), Some(triangle));

    double_click(&mut editor, Point::new(50.0, 0.0));

    assert_eq!(editor.regions().len(), 1);
    assert!(editor.region(triangle).is_none());
    assert!(editor.region(other).is_some());
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_double_click_node_deletes_without_collapse() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    click(&mut editor, Point::new(50.0, 50.0));

    double_click(&mut editor, Point::new(100.0, 0.0));

    let region = editor.region(id).expect("region kept");
    assert_eq!(region.len(), 3);
    assert_eq!(region.nodes()[1].position(), Point::new(100.0, 100.0));
}

#[test]
fn test_escape_discards_drawing() {
    let mut editor = EditorState::new();
    click(&mut editor, Point::new(10.0, 10.0));
    click(&mut editor, Point::new(20.0, 10.0));

    assert_eq!(
        editor.key_pressed(Key::Escape),
        Some(EditorAction::CancelDrawing)
    );
    assert!(editor.in_progress().is_none());
    assert!(editor.regions().is_empty());
}

#[test]
fn test_delete_key_removes_only_selected() {
    let mut editor = EditorState::new();
    let doomed = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    let kept = square(&mut editor, Point::new(200.0, 0.0), 100.0);
    editor.select(Some(doomed));

    editor.key_pressed(Key::Char('x'));

    // Deleting must not also duplicate
    assert_eq!(editor.regions().len(), 1);
    assert!(editor.region(kept).is_some());
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_duplicate_key() {
    let mut editor = EditorState::new();
    let original = square(&mut editor, Point::new(0.0, 0.0), 10.0);
    editor.select(Some(original));

    editor.key_pressed(Key::Char('d'));

    assert_eq!(editor.regions().len(), 2);
    let copy_id = editor.selected().expect("clone selected");
    assert_ne!(copy_id, original);

    let copy = editor.region(copy_id).expect("clone");
    assert!(copy.is_closed());
    assert_eq!(copy.edit_mode(), EditMode::Idle);
    assert_eq!(
        copy.points(),
        vec![
            Point::new(20.0, 20.0),
            Point::new(30.0, 20.0),
            Point::new(30.0, 30.0),
            Point::new(20.0, 30.0),
        ]
    );

    let source = editor.region(original).expect("original");
    assert_eq!(source.nodes()[0].position(), Point::new(0.0, 0.0));
}

#[test]
fn test_nudge_keys() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(10.0, 10.0), 10.0);

    // Nothing selected: nudges are ignored
    editor.key_pressed(Key::Char('l'));
    assert_eq!(
        editor.region(id).map(|r| r.nodes()[0].position()),
        Some(Point::new(10.0, 10.0))
    );

    editor.select(Some(id));
    editor.key_pressed(Key::Char('l'));
    editor.key_pressed(Key::Char('l'));
    editor.key_pressed(Key::Char('k'));
    editor.apply_action(EditorAction::Nudge(Direction::Left));
    editor.key_pressed(Key::Char('j'));
    editor.key_pressed(Key::Char('j'));

    assert_eq!(
        editor.region(id).map(|r| r.nodes()[0].position()),
        Some(Point::new(11.0, 11.0))
    );
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut editor = EditorState::new();
    assert_eq!(editor.key_pressed(Key::Char('q')), None);
    assert_eq!(editor.key_pressed(Key::Enter), None);
}

#[test]
fn test_event_dispatch() {
    let mut editor = EditorState::new();
    let events = [
        Event::PointerMoved {
            position: Point::new(5.0, 5.0),
        },
        Event::PointerPressed,
        Event::PointerReleased,
        Event::PointerMoved {
            position: Point::new(50.0, 5.0),
        },
        Event::PointerPressed,
        Event::PointerReleased,
        Event::KeyPressed { key: Key::Escape },
    ];

    for (i, event) in events.iter().enumerate() {
        editor.handle_event(event);
        editor.update_frame();
        if i == 5 {
            assert_eq!(editor.in_progress().map(|r| r.len()), Some(2));
        }
    }
    assert!(!editor.is_drawing());
    assert_eq!(editor.cursor(), Point::new(50.0, 5.0));
}

#[test]
fn test_select_rejects_unknown_id() {
    let mut editor = EditorState::new();
    editor.select(Some(42));
    assert_eq!(editor.selected(), None);
    assert!(editor.remove_region(42).is_none());
}

#[test]
fn test_double_click_on_bottom_edge_inserts_node() {
    let mut editor = EditorState::new();
    let id = square(&mut editor, Point::new(0.0, 0.0), 100.0);
    click(&mut editor, Point::new(50.0, 50.0));

    // The press on the outline keeps the region selected
    double_click(&mut editor, Point::new(50.0, 100.0));
    assert_eq!(editor.selected(), Some(id));
    assert!(!editor.is_drawing());

    let region = editor.region(id).expect("region");
    assert_eq!(region.len(), 5);
    assert_eq!(region.nodes()[3].position(), Point::new(50.0, 100.0));
    assert_eq!(region.nodes()[0].position(), Point::new(0.0, 0.0));
}
