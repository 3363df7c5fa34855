use serde::{Deserialize, Serialize};
use std::fmt;

mod gestures;

pub use gestures::{circle_corners, square_corners, triangle_vertices};

/// Which of the two eraser buttons is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EraserSize {
    Small,
    Large,
}

/// The tool the user picked; decides what a mouse gesture on the canvas
/// does (see [`crate::input::route_event`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    /// Freehand strokes
    #[default]
    Draw,
    /// Drag the shape under the cursor
    Move,
    Circle,
    /// Square-constrained rectangle
    Rectangle,
    Triangle,
    /// Click vertices, double-click to close
    Polygon,
    /// Delete a whole line, or a single shape, with one click
    Remove,
    Eraser(EraserSize),
    Text,
    Copy,
    Paste,
    Rotate,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Draw => "draw",
            ToolMode::Move => "move",
            ToolMode::Circle => "circle",
            ToolMode::Rectangle => "rectangle",
            ToolMode::Triangle => "triangle",
            ToolMode::Polygon => "polygon",
            ToolMode::Remove => "remove",
            ToolMode::Eraser(EraserSize::Small) => "small eraser",
            ToolMode::Eraser(EraserSize::Large) => "large eraser",
            ToolMode::Text => "text",
            ToolMode::Copy => "copy",
            ToolMode::Paste => "paste",
            ToolMode::Rotate => "rotate",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
