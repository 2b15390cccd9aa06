//! Touch disambiguation through the grid: scroll, tap, hold-to-drag.

use crate::helpers::*;
use slotgrid::input::{TouchEvent, TouchPoint};
use slotgrid::Slot;

#[test]
fn test_hold_then_drag_selects_range() {
    let (mut grid, recorder) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    let response = touch_start(&mut grid, start, 0);
    assert!(!response.prevent_default);
    assert_eq!(grid.timers().len(), 1);

    // Promotion happens when time passes, even without new input
    let response = grid.advance(t(300));
    assert!(response.preview_changed);
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_selecting());

    let p = point_at(&grid, 1, 0, 13);
    let response = touch_move(&mut grid, p, 400);
    assert!(response.prevent_default);

    let response = touch_end(&mut grid, p, 450);
    assert!(response.committed);
    assert!(response.suppress_click);
    assert_eq!(selected(&grid, day(0)), vec![10, 11, 12, 13]);
    assert_eq!(recorder.change_count(), 1);
}

#[test]
fn test_next_event_fires_overdue_hold() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);

    // The move at 500 first promotes (due at 300), then extends
    let p = point_at(&grid, 1, 0, 12);
    let response = touch_move(&mut grid, p, 500);
    assert!(response.prevent_default);
    assert_eq!(grid.column(day(0)).unwrap().preview().unwrap().len(), 3);
}

#[test]
fn test_early_move_is_scroll() {
    let (mut grid, recorder) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);

    let response = touch_move(&mut grid, offset(start, 0.0, 15.0), 120);
    assert!(!response.prevent_default);
    assert!(grid.timers().is_empty());

    grid.advance(t(1000));
    let response = touch_end(&mut grid, offset(start, 0.0, 80.0), 1000);
    assert!(!response.committed);
    assert!(selected(&grid, day(0)).is_empty());
    assert_eq!(recorder.change_count(), 0);
}

#[test]
fn test_jitter_below_threshold_still_promotes() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);
    touch_move(&mut grid, offset(start, 8.0, 8.0), 100);
    grid.advance(t(300));
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_selecting());
}

#[test]
fn test_quick_tap_toggles_start_slot_only() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let response = tap(&mut grid, 0, 16, 0);
    assert!(response.committed);
    assert!(response.suppress_click);
    assert_eq!(selected(&grid, day(0)), vec![16]);
    assert!(grid.timers().is_empty());

    tap(&mut grid, 0, 16, 2000);
    assert!(selected(&grid, day(0)).is_empty());
}

#[test]
fn test_tap_and_click_agree() {
    let (mut tapped, _) = TestGridBuilder::new().build();
    let (mut clicked, _) = TestGridBuilder::new().build();
    tap(&mut tapped, 0, 33, 0);
    click(&mut clicked, day(0), 33, 0);
    assert_eq!(tapped.selection_map(), clicked.selection_map());
}

#[test]
fn test_cancel_discards_preview() {
    let (mut grid, recorder) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);
    grid.advance(t(300));
    let p = point_at(&grid, 1, 0, 20);
    touch_move(&mut grid, p, 350);

    grid.touch_cancel(&TouchEvent::lifted(t(400), p));
    assert!(selected(&grid, day(0)).is_empty());
    assert!(grid.column(day(0)).unwrap().input_state().is_idle());
    assert_eq!(recorder.change_count(), 0);
}

#[test]
fn test_cancel_while_pending_stops_timer() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);
    grid.touch_cancel(&TouchEvent::lifted(t(100), start));

    assert!(grid.timers().is_empty());
    grid.advance(t(500));
    assert!(grid.column(day(0)).unwrap().input_state().is_idle());
}

#[test]
fn test_second_finger_drops_pending_touch() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let first = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, first, 0);

    let second = point_at(&grid, 2, 0, 30);
    let event = TouchEvent {
        time: t(50),
        touches: vec![first, second],
        changed: vec![second],
    };
    grid.touch_move(&event);

    assert!(grid.timers().is_empty());
    grid.advance(t(400));
    assert!(grid.column(day(0)).unwrap().input_state().is_idle());
}

#[test]
fn test_untracked_touch_end_ignored() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);

    let stranger = TouchPoint::new(7, start.x, start.y);
    let response = touch_end(&mut grid, stranger, 100);
    assert!(!response.committed);
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_pending());
}

#[test]
fn test_drag_across_columns_is_a_miss() {
    let (mut grid, _) = TestGridBuilder::new().with_days(2).build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);
    grid.advance(t(300));
    let inside = point_at(&grid, 1, 0, 12);
    touch_move(&mut grid, inside, 320);

    // Finger slides into the neighbouring day
    let neighbour = point_at(&grid, 1, 1, 30);
    let response = touch_move(&mut grid, neighbour, 340);
    assert!(response.prevent_default);
    assert!(!response.preview_changed);

    touch_end(&mut grid, neighbour, 400);
    assert_eq!(selected(&grid, day(0)), vec![10, 11, 12]);
    assert!(selected(&grid, day(1)).is_empty());
}

#[test]
fn test_scroll_offset_moves_hit_targets() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let (x, y) = grid.geometry().slot_center(0, Slot(0));
    grid.set_scroll_top(200.0);

    // The same screen point now lies ten slots further down
    let hit = grid.hit_test(x, y).unwrap();
    assert_eq!(hit.slot, Slot(10));
}

#[test]
fn test_mouse_press_during_touch_hold_ignored() {
    let (mut grid, recorder) = TestGridBuilder::new().build();
    let start = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, start, 0);

    let response = grid.pointer_down(day(0), Slot(40), t(100));
    assert!(!response.preview_changed);
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_pending());

    // The touch gesture carries on and is the only thing committed
    grid.advance(t(300));
    let p = point_at(&grid, 1, 0, 12);
    touch_move(&mut grid, p, 350);
    grid.pointer_up(t(360));
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_selecting());

    touch_end(&mut grid, p, 400);
    assert_eq!(selected(&grid, day(0)), vec![10, 11, 12]);
    assert_eq!(recorder.change_count(), 1);
}

#[test]
fn test_touch_start_during_mouse_drag_ignored() {
    let (mut grid, _) = TestGridBuilder::new().build();
    grid.pointer_down(day(0), Slot(4), t(0));
    grid.pointer_enter(day(0), Slot(6), t(10));

    let p = point_at(&grid, 1, 0, 30);
    touch_start(&mut grid, p, 20);
    assert!(grid.timers().is_empty());
    assert!(grid.column(day(0)).unwrap().input_state().is_dragging());

    grid.pointer_up(t(40));
    assert_eq!(selected(&grid, day(0)), vec![4, 5, 6]);
}

#[test]
fn test_second_finger_during_selection_keeps_session() {
    let (mut grid, _) = TestGridBuilder::new().build();
    let first = point_at(&grid, 1, 0, 10);
    touch_start(&mut grid, first, 0);
    grid.advance(t(300));

    let second = point_at(&grid, 2, 0, 30);
    let response = grid.touch_start(
        day(0),
        Slot(30),
        &TouchEvent {
            time: t(320),
            touches: vec![first, second],
            changed: vec![second],
        },
    );
    assert!(response.prevent_default);
    assert!(!response.committed);
    assert!(grid.column(day(0)).unwrap().input_state().is_touch_selecting());
    assert_eq!(grid.column(day(0)).unwrap().preview().unwrap().len(), 1);

    let p = point_at(&grid, 1, 0, 11);
    touch_move(&mut grid, p, 350);
    touch_end(&mut grid, p, 400);
    assert_eq!(selected(&grid, day(0)), vec![10, 11]);
}
