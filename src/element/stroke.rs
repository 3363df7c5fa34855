use super::common::{Color, StrokeStyle};
use super::{Element, ElementId, GroupId};
use crate::geometry::{BoundingBox, Delta, Point, polyline_distance, translate_points};

/// One committed segment of a freehand drag.
///
/// Every segment drawn in the same continuous drag shares a [`GroupId`], and
/// the group, not the individual segment, is what the user moves, erases as a
/// whole line, copies and rotates.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: ElementId,
    group: GroupId,
    points: Vec<Point>,
    color: Color,
    width: f64,
}

impl Stroke {
    pub(crate) fn new(id: ElementId, group: GroupId, points: Vec<Point>, style: StrokeStyle) -> Self {
        Self {
            id,
            group,
            points,
            color: style.color,
            width: style.width,
        }
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: GroupId) {
        self.group = group;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color.clone(), self.width)
    }
}

impl Element for Stroke {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn rect(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
            .unwrap_or_else(|| BoundingBox::from_corners(Point::ORIGIN, Point::ORIGIN))
    }

    fn paint_rect(&self) -> BoundingBox {
        self.rect().inflate(self.width / 2.0)
    }

    fn hit_test(&self, pos: Point, tolerance: f64) -> bool {
        polyline_distance(pos, &self.points) <= self.width / 2.0 + tolerance
    }

    fn translate(&mut self, delta: Delta) {
        translate_points(&mut self.points, delta);
    }

    fn color(&self) -> &Color {
        &self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> Stroke {
        Stroke::new(
            ElementId(1),
            GroupId(1),
            vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)],
            StrokeStyle::new("red", 2.0),
        )
    }

    #[test]
    fn hit_within_half_width() {
        let stroke = diagonal();
        assert!(stroke.hit_test(Point::new(15.0, 15.0), 0.0));
        assert!(stroke.hit_test(Point::new(15.0, 15.5), 0.0));
        assert!(!stroke.hit_test(Point::new(50.0, 50.0), 0.0));
    }

    #[test]
    fn tolerance_widens_the_hit_area() {
        let stroke = diagonal();
        let near = Point::new(20.0, 23.0);
        assert!(!stroke.hit_test(near, 0.0));
        assert!(stroke.hit_test(near, 2.5));
    }

    #[test]
    fn translate_moves_every_point() {
        let mut stroke = diagonal();
        stroke.translate(Delta::new(5.0, 10.0));
        assert_eq!(stroke.points(), &[Point::new(15.0, 20.0), Point::new(25.0, 30.0)]);
        assert_eq!(stroke.group(), GroupId(1));
    }

    #[test]
    fn paint_rect_includes_width() {
        let rect = diagonal().paint_rect();
        assert_eq!(rect.min, Point::new(9.0, 9.0));
        assert_eq!(rect.max, Point::new(21.0, 21.0));
    }
}
