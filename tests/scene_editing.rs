mod common;

use common::{drag, init_logging, pt, red_fill};
use proptest::prelude::*;
use sketchpad::element::{BoxShape, ElementId};
use sketchpad::geometry::rotate_points;
use sketchpad::{Delta, EditingSession, Element, ElementType, Point, Scene, SketchError};

fn corners(scene: &Scene, id: ElementId) -> [Point; 2] {
    match scene.get(id) {
        Some(ElementType::Rectangle(shape)) => BoxShape::corners(shape),
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_move_rectangle_by_delta() {
    init_logging();
    let mut session = EditingSession::new();
    let id = session.place_rectangle(pt(0.0, 0.0), pt(10.0, 10.0), red_fill());

    assert!(session.move_by(id, Delta::new(5.0, -5.0)));
    assert_eq!(corners(session.scene(), id), [pt(5.0, -5.0), pt(15.0, 5.0)]);

    // Absent identity: nothing happens.
    assert!(!session.move_by(ElementId(404), Delta::new(1.0, 1.0)));
}

#[test]
fn test_duplicate_four_point_stroke() {
    init_logging();
    let mut session = EditingSession::new();
    let original = drag(&mut session, &[(0.0, 0.0), (1.0, 2.0), (3.0, 3.0), (4.0, 1.0)]).unwrap();
    session.place_rectangle(pt(50.0, 50.0), pt(60.0, 60.0), red_fill());
    let before: Vec<Point> = session.scene().get(original).unwrap().vertices().unwrap().to_vec();

    let copy = session.duplicate(original, Delta::new(3.0, 3.0)).unwrap();
    let scene = session.scene();

    assert_ne!(copy, original);
    assert_eq!(scene.rank(copy), Some(scene.len() - 1));
    let copied = scene.get(copy).unwrap().vertices().unwrap();
    assert_eq!(copied.len(), 4);
    for (new, old) in copied.iter().zip(&before) {
        assert_eq!(*new, *old + Delta::new(3.0, 3.0));
    }
    assert_eq!(scene.get(original).unwrap().vertices().unwrap(), before.as_slice());
    assert_ne!(scene.get(copy).unwrap().group(), scene.get(original).unwrap().group());

    assert_eq!(session.duplicate(ElementId(999), Delta::ZERO), None);
}

#[test]
fn test_close_polygon_with_two_vertices() {
    init_logging();
    let mut session = EditingSession::new();
    session.add_polygon_vertex(pt(0.0, 0.0));
    session.add_polygon_vertex(pt(5.0, 5.0));

    assert_eq!(session.close_polygon(red_fill()), None);
    assert!(session.scene().is_empty());
    assert!(session.pending_polygon().is_empty());

    for (x, y) in [(0.0, 0.0), (5.0, 0.0), (0.0, 5.0)] {
        session.add_polygon_vertex(pt(x, y));
    }
    assert!(session.close_polygon(red_fill()).is_some());
    assert_eq!(session.scene().len(), 1);
}

#[test]
fn test_erase_whole_group_removes_only_the_group() {
    init_logging();
    let mut session = EditingSession::new();
    session.set_segment_limit(3);
    let below = session.place_rectangle(pt(100.0, 100.0), pt(110.0, 110.0), red_fill());
    drag(&mut session, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]).unwrap();
    let above = session.place_rectangle(pt(200.0, 200.0), pt(210.0, 210.0), red_fill());

    let segments = session.scene().len() - 2;
    assert_eq!(segments, 2);

    let removed = session.erase_whole_group(pt(25.0, 0.0));
    assert_eq!(removed.len(), segments);
    assert_eq!(session.scene().ids(), &[below, above]);

    // Non-stroke: only that shape goes.
    assert_eq!(session.erase_whole_group(pt(105.0, 105.0)), vec![below]);
    assert!(session.erase_whole_group(pt(500.0, 500.0)).is_empty());
}

#[test]
fn test_erase_at_uses_radius() {
    init_logging();
    let mut session = EditingSession::new();
    let stroke = drag(&mut session, &[(0.0, 0.0), (10.0, 0.0)]).unwrap();
    let rect = session.place_rectangle(pt(0.0, 5.0), pt(10.0, 10.0), red_fill());

    assert!(session.erase_at(pt(5.0, 3.0), 0.5).is_empty());
    assert_eq!(session.erase_at(pt(5.0, 3.0), 2.5), vec![stroke, rect]);
    assert!(session.scene().is_empty());
}

#[test]
fn test_raise_and_lower_at_bounds_are_noops() {
    let mut session = EditingSession::new();
    let bottom = session.place_rectangle(pt(0.0, 0.0), pt(1.0, 1.0), red_fill());
    let middle = session.place_rectangle(pt(2.0, 0.0), pt(3.0, 1.0), red_fill());
    let top = session.place_rectangle(pt(4.0, 0.0), pt(5.0, 1.0), red_fill());

    assert!(!session.raise_layer(top));
    assert!(!session.lower_layer(bottom));
    assert_eq!(session.scene().ids(), &[bottom, middle, top]);

    assert!(session.lower_layer(top));
    assert_eq!(session.scene().ids(), &[bottom, top, middle]);
}

#[test]
fn test_rotate_stroke_group_four_times() {
    let mut session = EditingSession::new();
    session.set_segment_limit(3);
    let id = drag(&mut session, &[(0.0, 0.0), (7.0, 1.0), (9.0, 4.5), (3.0, 8.0)]).unwrap();
    let before: Vec<_> = session.scene().all().cloned().collect();

    assert!(session.rotate90(id).unwrap());
    assert_ne!(session.scene().all().cloned().collect::<Vec<_>>(), before);
    for _ in 0..3 {
        session.rotate90(id).unwrap();
    }
    assert_eq!(session.scene().all().cloned().collect::<Vec<_>>(), before);
}

#[test]
fn test_rotate_two_point_stroke_with_halfway_mean() {
    init_logging();
    let mut session = EditingSession::new();
    // One grid unit apart, so the mean sits between two grid points.
    let id = drag(&mut session, &[(0.0, 0.0), (1.0 / 64.0, 0.0)]).unwrap();
    let before = session.scene().get(id).unwrap().vertices().unwrap().to_vec();

    for _ in 0..4 {
        session.rotate90(id).unwrap();
    }
    assert_eq!(session.scene().get(id).unwrap().vertices().unwrap(), before.as_slice());
}

#[test]
fn test_rotate_text_is_unsupported() {
    let mut session = EditingSession::new();
    let id = session
        .place_text(pt(5.0, 5.0), "abc", Default::default(), Default::default())
        .unwrap();
    let err = session.rotate90(id).unwrap_err();
    assert!(matches!(err, SketchError::UnsupportedOperation { kind: "text", .. }));
    assert_eq!(session.scene().get(id).unwrap().paste_origin(), pt(5.0, 5.0));
}

fn scene_with(count: usize) -> EditingSession {
    let mut session = EditingSession::new();
    for i in 0..count {
        let x = i as f64 * 20.0;
        session.place_rectangle(pt(x, 0.0), pt(x + 10.0, 10.0), red_fill());
    }
    session
}

fn any_point() -> impl Strategy<Value = Point> {
    (-1000i64..1000, -1000i64..1000).prop_map(|(x, y)| Point::from_raw(x * 16, y * 16))
}

proptest! {
    #[test]
    fn four_quarter_turns_are_identity(points in prop::collection::vec(any_point(), 0..12), pivot in any_point()) {
        let mut turned = points.clone();
        for _ in 0..4 {
            turned = rotate_points(&turned, pivot, 90);
        }
        prop_assert_eq!(turned, points);
    }

    #[test]
    fn four_rotate90_calls_restore_a_polygon(raw in prop::collection::vec((-50i64..50, -50i64..50), 3..8)) {
        let mut session = EditingSession::new();
        let vertices: Vec<Point> = raw.iter().map(|&(x, y)| Point::from_raw(x, y)).collect();
        let id = session.place_polygon(vertices.clone(), red_fill()).unwrap();
        for _ in 0..4 {
            prop_assert!(session.rotate90(id).unwrap());
        }
        prop_assert_eq!(session.scene().get(id).unwrap().vertices().unwrap(), vertices.as_slice());
    }

    #[test]
    fn erasing_far_away_changes_nothing(count in 0usize..6, x in 500.0f64..900.0, radius in 0.0f64..15.0) {
        let mut session = scene_with(count);
        let before = session.scene().ids().to_vec();
        let removed = session.erase_at(Point::new(x, x), radius);
        prop_assert!(removed.is_empty());
        prop_assert_eq!(session.scene().ids(), before.as_slice());
    }

    #[test]
    fn raise_top_and_lower_bottom_are_noops(count in 1usize..6) {
        let mut session = scene_with(count);
        let before = session.scene().ids().to_vec();
        let top = before[before.len() - 1];
        let bottom = before[0];
        prop_assert!(!session.raise_layer(top));
        prop_assert!(!session.lower_layer(bottom));
        prop_assert_eq!(session.scene().ids(), before.as_slice());
    }

    #[test]
    fn whole_group_erase_keeps_relative_order(segments in 1usize..5, others in 0usize..4) {
        let mut session = scene_with(others);
        session.set_segment_limit(2);
        let points: Vec<(f64, f64)> = (0..=segments).map(|i| (i as f64, 300.0)).collect();
        drag(&mut session, &points);
        for i in 0..others {
            session.place_rectangle(pt(i as f64 * 20.0, 400.0), pt(i as f64 * 20.0 + 5.0, 405.0), red_fill());
        }
        let before: Vec<ElementId> = session
            .scene()
            .all()
            .filter(|shape| shape.group().is_none())
            .map(|shape| shape.id())
            .collect();

        let removed = session.erase_whole_group(pt(0.0, 300.0));
        prop_assert_eq!(removed.len(), segments);
        prop_assert_eq!(session.scene().ids(), before.as_slice());
    }
}
