use super::common::{CHAR_WIDTH_RATIO, Color, FontSpec, LINE_HEIGHT_RATIO};
use super::{Element, ElementId};
use crate::geometry::{BoundingBox, Delta, Point};

/// A text label centred on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    id: ElementId,
    anchor: Point,
    content: String,
    font: FontSpec,
    color: Color,
}

impl TextLabel {
    pub(crate) fn new(id: ElementId, anchor: Point, content: String, font: FontSpec, color: Color) -> Self {
        Self {
            id,
            anchor,
            content,
            font,
            color,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub(crate) fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
    }

    /// Estimated extent in pixels: font size times character count.
    pub fn estimated_size(&self) -> (f64, f64) {
        let chars = self.content.chars().count() as f64;
        (
            self.font.size * CHAR_WIDTH_RATIO * chars,
            self.font.size * LINE_HEIGHT_RATIO,
        )
    }
}

impl Element for TextLabel {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn element_type(&self) -> &'static str {
        "text"
    }

    fn rect(&self) -> BoundingBox {
        let (width, height) = self.estimated_size();
        BoundingBox::centered(self.anchor, width, height)
    }

    fn paint_rect(&self) -> BoundingBox {
        self.rect()
    }

    fn hit_test(&self, pos: Point, tolerance: f64) -> bool {
        self.rect().inflate(tolerance).contains(pos)
    }

    fn translate(&mut self, delta: Delta) {
        self.anchor += delta;
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

    #[test]
    fn extent_grows_with_content() {
        let label = TextLabel::new(
            ElementId(9),
            Point::new(100.0, 50.0),
            "hello".to_string(),
            FontSpec::new("Arial", 10.0),
            Color::black(),
        );
        let (width, height) = label.estimated_size();
        assert!((width - 30.0).abs() < 1e-9);
        assert!((height - 12.0).abs() < 1e-9);

        let rect = label.rect();
        assert_eq!(rect.min, Point::new(85.0, 44.0));
        assert_eq!(rect.max, Point::new(115.0, 56.0));
        assert!(label.hit_test(Point::new(114.0, 55.0), 0.0));
        assert!(!label.hit_test(Point::new(116.0, 50.0), 0.0));
    }
}
