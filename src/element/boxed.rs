use super::common::{Color, ShapeStyle};
use super::{Element, ElementId};
use crate::geometry::{BoundingBox, Delta, Point};

/// A shape described by two opposite corners: rectangles and ellipses.
///
/// Ellipses are hit-tested against their bounding box, the same as
/// rectangles. The corners are stored as given so the document keeps the
/// drag direction the user drew with.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    id: ElementId,
    corners: [Point; 2],
    style: ShapeStyle,
    ellipse: bool,
}

impl BoxShape {
    pub(crate) fn rectangle(id: ElementId, a: Point, b: Point, style: ShapeStyle) -> Self {
        Self {
            id,
            corners: [a, b],
            style,
            ellipse: false,
        }
    }

    pub(crate) fn ellipse(id: ElementId, a: Point, b: Point, style: ShapeStyle) -> Self {
        Self {
            id,
            corners: [a, b],
            style,
            ellipse: true,
        }
    }

    pub fn corners(&self) -> [Point; 2] {
        self.corners
    }

    pub fn is_ellipse(&self) -> bool {
        self.ellipse
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

impl Element for BoxShape {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn element_type(&self) -> &'static str {
        if self.ellipse { "ellipse" } else { "rectangle" }
    }

    fn rect(&self) -> BoundingBox {
        BoundingBox::from_corners(self.corners[0], self.corners[1])
    }

    fn paint_rect(&self) -> BoundingBox {
        self.rect().inflate(self.style.width / 2.0)
    }

    fn hit_test(&self, pos: Point, tolerance: f64) -> bool {
        self.rect().inflate(tolerance).contains(pos)
    }

    fn translate(&mut self, delta: Delta) {
        for corner in &mut self.corners {
            *corner += delta;
        }
    }

    fn color(&self) -> &Color {
        &self.style.fill
    }

    fn set_color(&mut self, color: Color) {
        self.style.fill = color;
    }
}
