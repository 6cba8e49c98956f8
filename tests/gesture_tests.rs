use cropframe::config::SessionConfig;
use cropframe::geometry::rect::{CropRect, Point};
use cropframe::session::CropSession;

// 400x400 image in a 400x800 viewport: displayed 400x400, insets (0, 200),
// initial rect (32, 232, 336, 336), limits 200..=400 on both axes.
fn session() -> CropSession {
    let config = SessionConfig::with_ratio("1:1".parse().unwrap());
    CropSession::new((400, 400), (400.0, 800.0), &config).unwrap()
}

fn rect_eq(rect: CropRect, expected: (f32, f32, f32, f32)) {
    let eps = 0.001;
    assert!(
        (rect.x - expected.0).abs() <= eps
            && (rect.y - expected.1).abs() <= eps
            && (rect.width - expected.2).abs() <= eps
            && (rect.height - expected.3).abs() <= eps,
        "rect {rect:?} != expected {expected:?}"
    );
}

fn press_body(session: &mut CropSession) -> Point {
    let rect = session.rect();
    let center = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    session.pointer_down(center);
    center
}

fn press_top_left(session: &mut CropSession) -> Point {
    let rect = session.rect();
    let point = Point::new(rect.x + 10.0, rect.y + 10.0);
    session.pointer_down(point);
    point
}

#[test]
fn body_drag_translates_without_resizing() {
    let mut s = session();
    let start = press_body(&mut s);
    s.pointer_moved(Point::new(start.x + 10.0, start.y + 5.0), start);
    s.pointer_up();
    rect_eq(s.rect(), (42.0, 237.0, 336.0, 336.0));
}

#[test]
fn body_drag_clamps_to_the_image_region() {
    let mut s = session();
    let start = press_body(&mut s);
    s.pointer_moved(Point::new(start.x + 1000.0, start.y + 1000.0), start);
    rect_eq(s.rect(), (64.0, 264.0, 336.0, 336.0));

    s.pointer_moved(Point::new(start.x - 1000.0, start.y - 1000.0), start);
    rect_eq(s.rect(), (0.0, 200.0, 336.0, 336.0));
}

#[test]
fn corner_grow_keeps_the_opposite_corner_fixed() {
    let mut s = session();
    let before = s.rect();
    let start = press_top_left(&mut s);
    // Up-left on the top-left corner grows on both axes.
    s.pointer_moved(Point::new(start.x - 10.0, start.y - 10.0), start);
    let after = s.rect();

    rect_eq(after, (22.0, 222.0, 346.0, 346.0));
    assert!((after.max_x() - before.max_x()).abs() <= 0.001);
    assert!((after.max_y() - before.max_y()).abs() <= 0.001);
}

#[test]
fn corner_shrink_keeps_the_opposite_corner_fixed() {
    let mut s = session();
    let before = s.rect();
    let start = press_top_left(&mut s);
    s.pointer_moved(Point::new(start.x + 10.0, start.y + 10.0), start);
    let after = s.rect();

    rect_eq(after, (42.0, 242.0, 326.0, 326.0));
    assert!((after.max_x() - before.max_x()).abs() <= 0.001);
    assert!((after.max_y() - before.max_y()).abs() <= 0.001);
}

#[test]
fn resize_step_uses_the_dominant_axis() {
    let mut s = session();
    let start = press_top_left(&mut s);
    s.pointer_moved(Point::new(start.x - 10.0, start.y - 3.0), start);
    let rect = s.rect();
    assert_eq!((rect.width, rect.height), (346.0, 346.0));
}

#[test]
fn disagreeing_axes_leave_the_rect_alone() {
    let mut s = session();
    let before = s.rect();
    let start = press_top_left(&mut s);
    // Right (shrink on x) plus up (grow on y): ambiguous, discarded.
    s.pointer_moved(Point::new(start.x + 10.0, start.y - 10.0), start);
    assert_eq!(s.rect(), before);
}

#[test]
fn zero_delta_moves_are_idempotent() {
    let mut s = session();
    let before = s.rect();
    let start = press_body(&mut s);
    s.pointer_moved(start, start);
    assert_eq!(s.rect(), before);
    s.pointer_up();

    let start = press_top_left(&mut s);
    s.pointer_moved(start, start);
    assert_eq!(s.rect(), before);
}

#[test]
fn shrink_below_the_minimum_snaps_to_it() {
    let mut s = session();
    let start = press_top_left(&mut s);
    // 336 - 150 = 186, below the 200 minimum: width snaps back and height
    // is re-derived, never left at the unclamped value.
    s.pointer_moved(Point::new(start.x + 150.0, start.y + 150.0), start);
    rect_eq(s.rect(), (182.0, 382.0, 200.0, 200.0));
}

#[test]
fn grow_stops_at_the_displayed_image_size() {
    let mut s = session();
    let start = press_top_left(&mut s);
    s.pointer_moved(Point::new(start.x - 100.0, start.y - 100.0), start);
    // 336 + 100 overflows the 400x400 display: snapped to the full region.
    rect_eq(s.rect(), (0.0, 200.0, 400.0, 400.0));

    // At the maximum, further growth is refused outright.
    let at_max = s.rect();
    s.pointer_moved(Point::new(start.x - 110.0, start.y - 110.0), Point::new(start.x - 100.0, start.y - 100.0));
    assert_eq!(s.rect(), at_max);
}

#[test]
fn moves_without_a_pointer_down_are_ignored() {
    let mut s = session();
    let before = s.rect();
    s.pointer_moved(Point::new(100.0, 300.0), Point::new(90.0, 290.0));
    assert_eq!(s.rect(), before);
}

#[test]
fn moves_after_pointer_up_are_ignored() {
    let mut s = session();
    let start = press_body(&mut s);
    s.pointer_up();
    let before = s.rect();
    s.pointer_moved(Point::new(start.x + 50.0, start.y), start);
    assert_eq!(s.rect(), before);
}

#[test]
fn presses_outside_the_rect_do_nothing() {
    let mut s = session();
    let before = s.rect();
    s.pointer_down(Point::new(1.0, 201.0));
    s.pointer_moved(Point::new(21.0, 221.0), Point::new(1.0, 201.0));
    assert_eq!(s.rect(), before);
}

#[test]
fn invariants_hold_across_a_gesture_sequence() {
    let mut s = session();
    let moves: &[(f32, f32)] = &[
        (40.0, -25.0),
        (-80.0, 10.0),
        (15.0, 120.0),
        (-300.0, -300.0),
        (7.0, 7.0),
        (500.0, 0.0),
    ];

    let mut cursor = press_top_left(&mut s);
    for &(dx, dy) in moves {
        let next = Point::new(cursor.x + dx, cursor.y + dy);
        s.pointer_moved(next, cursor);
        cursor = next;

        let rect = s.rect();
        let limits = s.limits();
        let m = s.metrics();
        assert!((rect.width / rect.height - 1.0).abs() < 1e-4, "ratio drifted: {rect:?}");
        assert!(rect.width >= limits.min_w - 1e-3 && rect.width <= limits.max_w + 1e-3);
        assert!(rect.x >= m.inset_x - 1e-3 && rect.max_x() <= m.inset_x + m.image_w + 1e-3);
        assert!(rect.y >= m.inset_y - 1e-3 && rect.max_y() <= m.inset_y + m.image_h + 1e-3);
    }
}
