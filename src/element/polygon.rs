use super::common::{Color, ShapeStyle};
use super::{Element, ElementId};
use crate::geometry::{BoundingBox, Delta, Point, distance_point_to_segment, point_in_polygon, translate_points};

/// Minimum number of vertices a committed polygon carries.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A closed polygon. Collinear or zero-area vertex sets are allowed; only the
/// vertex count is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    id: ElementId,
    vertices: Vec<Point>,
    style: ShapeStyle,
}

impl Polygon {
    /// Returns `None` when fewer than [`MIN_POLYGON_VERTICES`] are given.
    pub(crate) fn new(id: ElementId, vertices: Vec<Point>, style: ShapeStyle) -> Option<Self> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        Some(Self { id, vertices, style })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Replace the vertices with an equally long list (rotation).
    pub(crate) fn set_vertices(&mut self, vertices: Vec<Point>) {
        debug_assert_eq!(vertices.len(), self.vertices.len());
        self.vertices = vertices;
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub(crate) fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn edge_distance(&self, pos: Point) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| distance_point_to_segment(pos, self.vertices[i], self.vertices[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Element for Polygon {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn element_type(&self) -> &'static str {
        "polygon"
    }

    fn rect(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
            .unwrap_or_else(|| BoundingBox::from_corners(Point::ORIGIN, Point::ORIGIN))
    }

    fn paint_rect(&self) -> BoundingBox {
        self.rect().inflate(self.style.width / 2.0)
    }

    fn hit_test(&self, pos: Point, tolerance: f64) -> bool {
        point_in_polygon(pos, &self.vertices) || self.edge_distance(pos) <= self.style.width / 2.0 + tolerance
    }

    fn translate(&mut self, delta: Delta) {
        translate_points(&mut self.vertices, delta);
    }

    fn color(&self) -> &Color {
        &self.style.fill
    }

    fn set_color(&mut self, color: Color) {
        self.style.fill = color;
    }
}
