#![allow(dead_code)]

use sketchpad::element::{ElementId, ShapeStyle, StrokeStyle, factory};
use sketchpad::{EditingSession, ElementType, Point};

/// Route `log` output through the test harness; repeated calls are fine.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn black_stroke() -> StrokeStyle {
    StrokeStyle::new("black", 2.0)
}

pub fn red_fill() -> ShapeStyle {
    ShapeStyle::filled("red", 1.0)
}

/// Draw one continuous freehand drag through `points`.
pub fn drag(session: &mut EditingSession, points: &[(f64, f64)]) -> Option<ElementId> {
    let (first, rest) = points.split_first()?;
    session.begin_stroke(pt(first.0, first.1), black_stroke());
    for &(x, y) in rest {
        session.extend_stroke(pt(x, y));
    }
    session.end_stroke()
}

pub fn square(x: f64, y: f64, side: f64) -> ElementType {
    factory::create_rectangle(ElementId(0), pt(x, y), pt(x + side, y + side), red_fill())
}
