mod common;

use common::{pt, red_fill};
use sketchpad::element::{Color, ElementId, FontSpec, GroupId, StrokeStyle, factory};
use sketchpad::{Delta, Element, ShapeKind};

#[test]
fn test_element_creation() {
    let stroke = factory::create_stroke(
        ElementId(1),
        GroupId(1),
        vec![pt(10.0, 10.0), pt(20.0, 20.0)],
        StrokeStyle::new("red", 2.0),
    );
    assert_eq!(stroke.id(), ElementId(1));
    assert_eq!(stroke.element_type(), "stroke");
    assert_eq!(stroke.kind(), ShapeKind::Stroke);
    assert_eq!(stroke.group(), Some(GroupId(1)));

    let text = factory::create_text(ElementId(2), pt(0.0, 0.0), "label", FontSpec::default(), Color::black());
    assert_eq!(text.element_type(), "text");
    assert_eq!(text.group(), None);
    assert!(text.vertices().is_none());
}

#[test]
fn test_polygon_needs_three_vertices() {
    assert!(factory::create_polygon(ElementId(1), vec![pt(0.0, 0.0), pt(1.0, 0.0)], red_fill()).is_none());
    // Collinear vertices are allowed.
    let flat = factory::create_polygon(ElementId(1), vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)], red_fill())
        .expect("three vertices");
    assert!(flat.hit_test(pt(1.5, 0.0), 0.0));
    assert!(!flat.hit_test(pt(1.5, 3.0), 0.0));
}

#[test]
fn test_element_rect() {
    let rect = factory::create_rectangle(ElementId(1), pt(10.0, 0.0), pt(0.0, 10.0), red_fill());
    let bounds = rect.rect();
    assert_eq!(bounds.min, pt(0.0, 0.0));
    assert_eq!(bounds.max, pt(10.0, 10.0));

    // Painted bounds include half the outline width.
    let painted = rect.paint_rect();
    assert_eq!(painted.min, pt(-0.5, -0.5));
}

#[test]
fn test_hit_test_policies() {
    let stroke = factory::create_stroke(
        ElementId(1),
        GroupId(1),
        vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)],
        StrokeStyle::new("black", 2.0),
    );
    assert!(stroke.hit_test(pt(10.5, 5.0), 0.0));
    assert!(!stroke.hit_test(pt(5.0, 5.0), 0.0));
    assert!(stroke.hit_test(pt(5.0, 5.0), 4.0));

    let ellipse = factory::create_ellipse(ElementId(2), pt(0.0, 0.0), pt(10.0, 4.0), red_fill());
    assert!(ellipse.hit_test(pt(0.0, 0.0), 0.0));
    assert!(!ellipse.hit_test(pt(-1.0, 0.0), 0.0));
    assert!(ellipse.hit_test(pt(-1.0, 0.0), 1.0));
}

#[test]
fn test_translate_keeps_identity_and_kind() {
    let font = FontSpec::new("Courier", 12.0);
    let mut text = factory::create_text(ElementId(3), pt(5.0, 5.0), "hi", font, Color::black());
    text.translate(Delta::new(-5.0, 2.5));
    assert_eq!(text.id(), ElementId(3));
    assert_eq!(text.paste_origin(), pt(0.0, 7.5));

    text.set_color(Color::new("blue"));
    assert_eq!(text.color().as_str(), "blue");
}
