use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geometry::{BoundingBox, Delta, Point};

mod boxed;
mod common;
mod polygon;
mod stroke;
mod text;

pub use boxed::BoxShape;
pub use common::{CHAR_WIDTH_RATIO, Color, FontSpec, LINE_HEIGHT_RATIO, PALETTE, ShapeStyle, StrokeStyle};
pub use polygon::{MIN_POLYGON_VERTICES, Polygon};
pub use stroke::Stroke;
pub use text::TextLabel;

/// Identity of a shape within a scene. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag shared by every stroke segment drawn in one continuous drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Common behaviour of every drawable shape.
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Re-key the element; only the scene does this, when inserting copies
    fn set_id(&mut self, id: ElementId);

    /// Kind tag as written to documents
    fn element_type(&self) -> &'static str;

    /// Geometric bounding box
    fn rect(&self) -> BoundingBox;

    /// Bounding box of the painted pixels, including line width
    fn paint_rect(&self) -> BoundingBox;

    /// Whether `pos` lies on the element, allowing `tolerance` extra pixels
    fn hit_test(&self, pos: Point, tolerance: f64) -> bool;

    /// Translate every coordinate by `delta`
    fn translate(&mut self, delta: Delta);

    fn color(&self) -> &Color;

    fn set_color(&mut self, color: Color);
}

/// The five shape kinds, without their attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Stroke,
    Polygon,
    Rectangle,
    Ellipse,
    Text,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Stroke => "stroke",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Text => "text",
        }
    }

    /// Only strokes and polygons can be turned.
    pub fn is_rotatable(&self) -> bool {
        matches!(self, ShapeKind::Stroke | ShapeKind::Polygon)
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stroke" => Ok(ShapeKind::Stroke),
            "polygon" => Ok(ShapeKind::Polygon),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "text" => Ok(ShapeKind::Text),
            other => Err(format!("unknown shape kind '{}'", other)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drawable shape: a closed set of kinds with fixed attribute sets.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(Stroke),
    Polygon(Polygon),
    Rectangle(BoxShape),
    Ellipse(BoxShape),
    Text(TextLabel),
}

impl ElementType {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ElementType::Stroke(_) => ShapeKind::Stroke,
            ElementType::Polygon(_) => ShapeKind::Polygon,
            ElementType::Rectangle(_) => ShapeKind::Rectangle,
            ElementType::Ellipse(_) => ShapeKind::Ellipse,
            ElementType::Text(_) => ShapeKind::Text,
        }
    }

    /// Group of a stroke segment; other kinds are never grouped.
    pub fn group(&self) -> Option<GroupId> {
        match self {
            ElementType::Stroke(s) => Some(s.group()),
            _ => None,
        }
    }

    /// Vertices of the rotatable kinds.
    pub fn vertices(&self) -> Option<&[Point]> {
        match self {
            ElementType::Stroke(s) => Some(s.points()),
            ElementType::Polygon(p) => Some(p.vertices()),
            _ => None,
        }
    }

    /// Replace the vertices of a stroke or polygon with an equally long list.
    /// Returns `false` for kinds without vertices.
    pub(crate) fn replace_vertices(&mut self, vertices: Vec<Point>) -> bool {
        match self {
            ElementType::Stroke(s) => {
                s.set_points(vertices);
                true
            }
            ElementType::Polygon(p) => {
                p.set_vertices(vertices);
                true
            }
            _ => false,
        }
    }

    /// Reference point used when pasting: the first vertex of strokes and
    /// polygons, the box centre of rectangles and ellipses, the text anchor.
    pub fn paste_origin(&self) -> Point {
        match self {
            ElementType::Stroke(s) => s.points().first().copied().unwrap_or(Point::ORIGIN),
            ElementType::Polygon(p) => p.vertices()[0],
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.rect().center(),
            ElementType::Text(t) => t.anchor(),
        }
    }

    /// Line width of strokes, outline width of closed shapes, font size of
    /// text.
    pub fn width(&self) -> f64 {
        match self {
            ElementType::Stroke(s) => s.width(),
            ElementType::Polygon(p) => p.style().width,
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.style().width,
            ElementType::Text(t) => t.font().size,
        }
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        match self {
            ElementType::Stroke(s) => s.set_width(width),
            ElementType::Polygon(p) => p.style_mut().width = width,
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b.style_mut().width = width,
            ElementType::Text(t) => t.set_font_size(width),
        }
    }

    pub(crate) fn set_group(&mut self, group: GroupId) {
        if let ElementType::Stroke(s) = self {
            s.set_group(group);
        }
    }

    fn as_element(&self) -> &dyn Element {
        match self {
            ElementType::Stroke(s) => s,
            ElementType::Polygon(p) => p,
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b,
            ElementType::Text(t) => t,
        }
    }

    fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            ElementType::Stroke(s) => s,
            ElementType::Polygon(p) => p,
            ElementType::Rectangle(b) | ElementType::Ellipse(b) => b,
            ElementType::Text(t) => t,
        }
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        self.as_element().id()
    }

    fn set_id(&mut self, id: ElementId) {
        self.as_element_mut().set_id(id)
    }

    fn element_type(&self) -> &'static str {
        self.kind().as_str()
    }

    fn rect(&self) -> BoundingBox {
        self.as_element().rect()
    }

    fn paint_rect(&self) -> BoundingBox {
        self.as_element().paint_rect()
    }

    fn hit_test(&self, pos: Point, tolerance: f64) -> bool {
        self.as_element().hit_test(pos, tolerance)
    }

    fn translate(&mut self, delta: Delta) {
        self.as_element_mut().translate(delta)
    }

    fn color(&self) -> &Color {
        self.as_element().color()
    }

    fn set_color(&mut self, color: Color) {
        self.as_element_mut().set_color(color)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;

    pub fn create_stroke(id: ElementId, group: GroupId, points: Vec<Point>, style: StrokeStyle) -> ElementType {
        ElementType::Stroke(Stroke::new(id, group, points, style))
    }

    /// `None` when fewer than three vertices are given.
    pub fn create_polygon(id: ElementId, vertices: Vec<Point>, style: ShapeStyle) -> Option<ElementType> {
        Polygon::new(id, vertices, style).map(ElementType::Polygon)
    }

    pub fn create_rectangle(id: ElementId, a: Point, b: Point, style: ShapeStyle) -> ElementType {
        ElementType::Rectangle(BoxShape::rectangle(id, a, b, style))
    }

    pub fn create_ellipse(id: ElementId, a: Point, b: Point, style: ShapeStyle) -> ElementType {
        ElementType::Ellipse(BoxShape::ellipse(id, a, b, style))
    }

    pub fn create_text(
        id: ElementId,
        anchor: Point,
        content: impl Into<String>,
        font: FontSpec,
        color: Color,
    ) -> ElementType {
        ElementType::Text(TextLabel::new(id, anchor, content.into(), font, color))
    }
}
