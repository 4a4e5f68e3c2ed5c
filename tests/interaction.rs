use egui::{Color32, Pos2, Rect, Vec2};
use simple_paint::{Canvas, Editor, Mode, Primitive};

fn create_test_editor() -> Editor<Canvas> {
    Editor::new(Canvas::new(Color32::WHITE, Vec2::new(400.0, 300.0)))
}

fn drag(editor: &mut Editor<Canvas>, from: Pos2, moves: &[Pos2], to: Pos2) {
    editor.on_pointer_down(from);
    for &pos in moves {
        editor.on_pointer_move(pos);
    }
    editor.on_pointer_up(to);
}

#[test]
fn test_rectangle_drag_commits_single_handle_stroke() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::RECTANGLE);

    let end = Pos2::new(50.0, 40.0);
    drag(
        &mut editor,
        Pos2::new(10.0, 10.0),
        &[Pos2::new(30.0, 20.0), Pos2::new(45.0, 35.0), end],
        end,
    );

    let canvas = editor.surface();
    assert_eq!(canvas.len(), 1);
    assert_eq!(editor.history().len(), 1);

    let stroke = &editor.history().strokes()[0];
    assert_eq!(stroke.len(), 1);
    let item = canvas.get(stroke.handles()[0]).unwrap();
    assert_eq!(
        item.primitive,
        Primitive::Rectangle {
            from: Pos2::new(10.0, 10.0),
            to: end,
        }
    );
    assert!(item.visible);
    assert!(editor.state().is_idle());
    assert_eq!(editor.state().preview(), None);
}

#[test]
fn test_shape_preview_is_replaced_and_anchor_fixed() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::CIRCLE);
    let anchor = Pos2::new(100.0, 100.0);

    editor.on_pointer_down(anchor);
    editor.on_pointer_move(Pos2::new(120.0, 110.0));
    let first = editor.state().preview().unwrap();
    editor.on_pointer_move(Pos2::new(150.0, 140.0));
    let second = editor.state().preview().unwrap();

    assert_ne!(first, second);
    assert!(editor.surface().get(first).is_none());
    assert_eq!(editor.surface().len(), 1);
    assert_eq!(editor.state().anchor(), Some(anchor));
    assert!(editor.state().pending_handles().is_empty());
    assert_eq!(
        editor.surface().get(second).unwrap().primitive,
        Primitive::Oval {
            from: anchor,
            to: Pos2::new(150.0, 140.0),
        }
    );
}

#[test]
fn test_shape_uses_release_position() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::LINE);

    drag(
        &mut editor,
        Pos2::new(0.0, 0.0),
        &[Pos2::new(10.0, 10.0)],
        Pos2::new(30.0, 5.0),
    );

    let handle = editor.history().strokes()[0].handles()[0];
    assert_eq!(
        editor.surface().get(handle).unwrap().primitive,
        Primitive::Line {
            from: Pos2::new(0.0, 0.0),
            to: Pos2::new(30.0, 5.0),
        }
    );
}

#[test]
fn test_shape_click_without_move_commits_nothing() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::RECTANGLE);

    drag(&mut editor, Pos2::new(10.0, 10.0), &[], Pos2::new(10.0, 10.0));

    assert!(editor.history().is_empty());
    assert!(editor.surface().is_empty());
}

#[test]
fn test_freehand_segments_chain_from_moving_anchor() {
    let mut editor = create_test_editor();
    editor.set_color(Color32::RED);
    editor.set_brush_size(7);

    drag(
        &mut editor,
        Pos2::new(0.0, 0.0),
        &[Pos2::new(10.0, 0.0), Pos2::new(20.0, 5.0)],
        Pos2::new(20.0, 5.0),
    );

    let stroke = &editor.history().strokes()[0];
    let segments: Vec<_> = stroke
        .handles()
        .iter()
        .map(|&h| editor.surface().get(h).unwrap().clone())
        .collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(
        segments[0].primitive,
        Primitive::Segment {
            from: Pos2::new(0.0, 0.0),
            to: Pos2::new(10.0, 0.0),
        }
    );
    assert_eq!(
        segments[1].primitive,
        Primitive::Segment {
            from: Pos2::new(10.0, 0.0),
            to: Pos2::new(20.0, 5.0),
        }
    );
    assert!(segments.iter().all(|s| s.color == Color32::RED && s.width == 7.0));
}

#[test]
fn test_eraser_paints_with_background() {
    let mut editor = Editor::new(Canvas::new(Color32::LIGHT_YELLOW, Vec2::new(400.0, 300.0)));
    editor.set_color(Color32::BLUE);
    editor.set_mode(Mode::Erase);

    drag(
        &mut editor,
        Pos2::new(10.0, 10.0),
        &[Pos2::new(20.0, 20.0)],
        Pos2::new(20.0, 20.0),
    );

    let handle = editor.history().strokes()[0].handles()[0];
    assert_eq!(editor.surface().get(handle).unwrap().color, Color32::LIGHT_YELLOW);
}

#[test]
fn test_brush_changes_are_not_retroactive() {
    let mut editor = create_test_editor();
    drag(
        &mut editor,
        Pos2::new(0.0, 0.0),
        &[Pos2::new(10.0, 10.0)],
        Pos2::new(10.0, 10.0),
    );

    editor.set_color(Color32::GREEN);
    editor.set_brush_size(12);
    editor.set_mode(Mode::RECTANGLE);
    drag(
        &mut editor,
        Pos2::new(50.0, 50.0),
        &[Pos2::new(80.0, 90.0)],
        Pos2::new(80.0, 90.0),
    );

    let strokes = editor.history().strokes();
    let first = editor.surface().get(strokes[0].handles()[0]).unwrap();
    let second = editor.surface().get(strokes[1].handles()[0]).unwrap();
    assert_eq!((first.color, first.width), (Color32::BLACK, 3.0));
    assert_eq!((second.color, second.width), (Color32::GREEN, 12.0));
}

#[test]
fn test_eraser_indicator_follows_hover() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::Erase);
    editor.set_brush_size(5);

    editor.on_hover(Pos2::new(100.0, 100.0));
    assert_eq!(editor.surface().len(), 1);
    let first = editor.indicator().unwrap();
    let rect = editor.surface().get(first).unwrap().primitive.bounding_rect();
    assert_eq!(rect.center(), Pos2::new(100.0, 100.0));
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.height(), 10.0);

    editor.on_hover(Pos2::new(200.0, 100.0));
    assert_eq!(editor.surface().len(), 1);
    assert!(editor.surface().get(first).is_none());
    let second = editor.indicator().unwrap();
    let rect = editor.surface().get(second).unwrap().primitive.bounding_rect();
    assert_eq!(
        rect,
        Rect::from_center_size(Pos2::new(200.0, 100.0), Vec2::splat(10.0))
    );
    assert!(editor.history().is_empty());
}

#[test]
fn test_indicator_hidden_outside_bounds_and_on_leave() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::Erase);

    editor.on_hover(Pos2::new(400.0, 300.0));
    assert!(editor.indicator().is_some());

    editor.on_hover(Pos2::new(401.0, 100.0));
    assert!(editor.indicator().is_none());
    assert!(editor.surface().is_empty());

    editor.on_hover(Pos2::new(10.0, 10.0));
    editor.on_pointer_leave();
    assert!(editor.indicator().is_none());
    assert!(editor.surface().is_empty());
}

#[test]
fn test_indicator_only_in_erase_mode() {
    let mut editor = create_test_editor();
    editor.on_hover(Pos2::new(50.0, 50.0));
    assert!(editor.indicator().is_none());

    editor.set_mode(Mode::Erase);
    editor.on_hover(Pos2::new(50.0, 50.0));
    assert!(editor.indicator().is_some());

    editor.set_mode(Mode::LINE);
    assert!(editor.indicator().is_none());
    assert!(editor.surface().is_empty());
}

#[test]
fn test_erase_drag_hides_then_restores_indicator() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::Erase);
    editor.on_hover(Pos2::new(10.0, 10.0));

    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    assert!(editor.indicator().is_none());
    editor.on_pointer_move(Pos2::new(30.0, 30.0));
    editor.on_pointer_up(Pos2::new(30.0, 30.0));

    let indicator = editor.indicator().unwrap();
    let stroke = &editor.history().strokes()[0];
    assert!(!stroke.handles().contains(&indicator));
    assert_eq!(
        editor.surface().get(indicator).unwrap().primitive.bounding_rect().center(),
        Pos2::new(30.0, 30.0)
    );

    // undoing the erase stroke leaves the indicator alone
    editor.undo();
    assert!(editor.surface().get(indicator).unwrap().visible);
}

#[test]
fn test_mode_change_mid_drag_drops_preview() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::RECTANGLE);
    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    editor.on_pointer_move(Pos2::new(40.0, 40.0));
    assert_eq!(editor.surface().len(), 1);

    editor.set_mode(Mode::CIRCLE);
    assert_eq!(editor.state().preview(), None);
    assert!(editor.surface().is_empty());

    editor.on_pointer_up(Pos2::new(40.0, 40.0));
    assert!(editor.history().is_empty());
}

#[test]
fn test_clear_mid_drag_releases_pending_handles() {
    let mut editor = create_test_editor();
    editor.on_pointer_down(Pos2::new(0.0, 0.0));
    editor.on_pointer_move(Pos2::new(5.0, 5.0));
    editor.on_pointer_move(Pos2::new(10.0, 5.0));

    editor.clear();

    assert!(editor.state().is_idle());
    assert!(editor.surface().is_empty());
    editor.on_pointer_up(Pos2::new(10.0, 5.0));
    assert!(editor.history().is_empty());
}

#[test]
fn test_events_while_idle_are_ignored() {
    let mut editor = create_test_editor();
    editor.on_pointer_move(Pos2::new(5.0, 5.0));
    editor.on_pointer_up(Pos2::new(5.0, 5.0));

    assert!(editor.surface().is_empty());
    assert!(editor.history().is_empty());
}

#[test]
fn test_brush_size_is_clamped() {
    let mut editor = create_test_editor();
    editor.set_brush_size(0);
    assert_eq!(editor.brush().size(), 1);
    editor.set_brush_size(100);
    assert_eq!(editor.brush().size(), 15);
}

#[test]
fn test_pointer_down_while_dragging_seals_previous_drag() {
    let mut editor = create_test_editor();
    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    editor.on_pointer_move(Pos2::new(20.0, 10.0));
    editor.on_pointer_move(Pos2::new(30.0, 10.0));

    // the release of the first drag never arrived
    editor.on_pointer_down(Pos2::new(100.0, 100.0));
    editor.on_pointer_move(Pos2::new(110.0, 100.0));
    editor.on_pointer_up(Pos2::new(110.0, 100.0));

    let strokes = editor.history().strokes();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].len(), 2);
    assert_eq!(strokes[1].len(), 1);
    assert_eq!(editor.history().cursor(), Some(1));
    assert_eq!(editor.surface().len(), 3);

    let second = editor.surface().get(strokes[1].handles()[0]).unwrap();
    assert_eq!(
        second.primitive,
        Primitive::Segment {
            from: Pos2::new(100.0, 100.0),
            to: Pos2::new(110.0, 100.0),
        }
    );
}

#[test]
fn test_pointer_down_while_shape_dragging_drops_preview() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::RECTANGLE);
    editor.on_pointer_down(Pos2::new(10.0, 10.0));
    editor.on_pointer_move(Pos2::new(40.0, 40.0));

    editor.on_pointer_down(Pos2::new(100.0, 100.0));
    assert_eq!(editor.state().preview(), None);
    assert!(editor.surface().is_empty());

    editor.on_pointer_move(Pos2::new(150.0, 120.0));
    editor.on_pointer_up(Pos2::new(150.0, 120.0));

    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.surface().len(), 1);
    let (_, item) = editor.surface().items().next().unwrap();
    assert_eq!(
        item.primitive,
        Primitive::Rectangle {
            from: Pos2::new(100.0, 100.0),
            to: Pos2::new(150.0, 120.0),
        }
    );
}

#[test]
fn test_hovering_does_not_accumulate_primitives() {
    let mut editor = create_test_editor();
    editor.set_mode(Mode::Erase);
    for i in 0..10_000 {
        editor.on_hover(Pos2::new((i % 400) as f32, 150.0));
    }

    assert_eq!(editor.surface().len(), 1);
    assert_eq!(editor.surface().items().count(), 1);
}
