use serde::{Deserialize, Serialize};
use std::fmt;

/// Width assumed per character, as a fraction of the font size, when
/// estimating a text label's extent. Exact glyph metrics belong to the
/// renderer.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Height of a text line as a fraction of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Named colors offered by the context menu.
pub const PALETTE: [&str; 5] = ["black", "green", "red", "blue", "yellow"];

/// A paint color as the renderer understands it: a color name such as
/// `"red"`, a `#rrggbb` string, or the empty string for "none".
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn black() -> Self {
        Self::new("black")
    }

    pub fn none() -> Self {
        Self::new("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Style of a freehand stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    pub fn new(color: impl Into<Color>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Style of a closed shape (polygon, rectangle, ellipse).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    /// Outline color; `None` draws no outline.
    pub outline: Option<Color>,
    pub width: f64,
}

impl ShapeStyle {
    pub fn filled(fill: impl Into<Color>, width: f64) -> Self {
        Self {
            fill: fill.into(),
            outline: None,
            width,
        }
    }

    pub fn with_outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }
}

/// Font attributes of a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 16.0)
    }
}
