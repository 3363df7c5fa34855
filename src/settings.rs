use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::element::{Color, FontSpec, StrokeStyle, ShapeStyle};
use crate::error::{Result, SketchError};
use crate::geometry::Delta;
use crate::state::write_atomic;
use crate::tools::EraserSize;

/// Range of the line width slider.
pub const LINE_WIDTH_RANGE: (f64, f64) = (1.0, 10.0);
/// Font sizes the text tool accepts.
pub const FONT_SIZE_RANGE: (f64, f64) = (8.0, 72.0);
/// Widths offered by the context menu.
pub const WIDTH_PRESETS: [f64; 3] = [4.0, 7.0, 10.0];

/// Current style and tuning values, passed into every command.
///
/// Missing keys in a settings file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub line_width: f64,
    pub color: Color,
    pub font: FontSpec,
    pub small_eraser_radius: f64,
    pub large_eraser_radius: f64,
    /// Extra pixels around a shape that still count as a click on it
    pub select_tolerance: f64,
    /// Offset applied by `duplicate` when the caller gives none
    pub paste_offset: [f64; 2],
    /// A freehand drag is split into segments of at most this many points
    pub max_stroke_points: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Color::black(),
            font: FontSpec::default(),
            small_eraser_radius: 2.0,
            large_eraser_radius: 15.0,
            select_tolerance: 1.0,
            paste_offset: [10.0, 10.0],
            max_stroke_points: 256,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. A file that does not exist yields the
    /// defaults; one that cannot be parsed or holds invalid values is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings =
            serde_json::from_str(&content).map_err(|e| SketchError::Settings(e.to_string()))?;
        settings.validate()?;
        settings.set_line_width(settings.line_width);
        settings.set_font_size(settings.font.size);
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        write_atomic(path, |writer| {
            std::io::Write::write_all(writer, content.as_bytes())?;
            Ok(())
        })
    }

    fn validate(&self) -> Result<()> {
        let numbers = [
            ("line_width", self.line_width),
            ("font.size", self.font.size),
            ("small_eraser_radius", self.small_eraser_radius),
            ("large_eraser_radius", self.large_eraser_radius),
            ("select_tolerance", self.select_tolerance),
            ("paste_offset", self.paste_offset[0]),
            ("paste_offset", self.paste_offset[1]),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(SketchError::Settings(format!("{} must be a finite number", name)));
        }
        if self.small_eraser_radius < 0.0 || self.large_eraser_radius < 0.0 || self.select_tolerance < 0.0 {
            return Err(SketchError::Settings("radii and tolerances cannot be negative".into()));
        }
        if self.max_stroke_points < 2 {
            return Err(SketchError::Settings("max_stroke_points must be at least 2".into()));
        }
        Ok(())
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width.clamp(LINE_WIDTH_RANGE.0, LINE_WIDTH_RANGE.1);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font.size = size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1);
    }

    pub fn eraser_radius(&self, size: EraserSize) -> f64 {
        match size {
            EraserSize::Small => self.small_eraser_radius,
            EraserSize::Large => self.large_eraser_radius,
        }
    }

    pub fn paste_delta(&self) -> Delta {
        Delta::new(self.paste_offset[0], self.paste_offset[1])
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color.clone(), self.line_width)
    }

    /// Closed shapes are filled with the current color and drawn without an
    /// outline.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle::filled(self.color.clone(), self.line_width)
    }
}
