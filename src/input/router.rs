use crate::command::Command;
use crate::tools::ToolMode;

use super::InputEvent;

/// Decide which engine call a mouse event on the canvas stands for under the
/// active tool. Events a tool ignores yield `None`.
pub fn route_event(mode: ToolMode, event: &InputEvent) -> Option<Command> {
    use InputEvent::*;

    let command = match (mode, *event) {
        (ToolMode::Draw, Press(at)) => Command::BeginStroke(at),
        (ToolMode::Draw, Drag { to, .. }) => Command::ExtendStroke(to),
        (ToolMode::Draw, Release { .. }) => Command::EndStroke,

        (ToolMode::Move, Press(at)) => Command::SelectAt(at),
        (ToolMode::Move, Drag { .. }) => Command::MoveSelection(event.delta()),

        (ToolMode::Circle, Release { origin, at }) => Command::PlaceCircle { center: origin, rim: at },
        (ToolMode::Rectangle, Release { origin, at }) => Command::PlaceSquare { origin, at },
        (ToolMode::Triangle, Release { origin, at }) => Command::PlaceTriangle { base: origin, at },

        (ToolMode::Polygon, Press(at)) => Command::AddPolygonVertex(at),
        (ToolMode::Polygon, DoubleClick(_)) => Command::ClosePolygon,

        (ToolMode::Remove, Press(at)) => Command::RemoveAt(at),
        (ToolMode::Eraser(size), Press(at)) => Command::EraseAt { at, size },
        (ToolMode::Eraser(size), Drag { to, .. }) => Command::EraseAt { at: to, size },

        (ToolMode::Text, Press(at)) => Command::RequestText(at),
        (ToolMode::Copy, Press(at)) => Command::CopyAt(at),
        (ToolMode::Paste, Press(at)) => Command::PasteAt(at),
        (ToolMode::Rotate, Press(at)) => Command::RotateAt(at),

        _ => return None,
    };
    Some(command)
}
