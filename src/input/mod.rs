use crate::geometry::{Delta, Point};

mod router;
pub use router::route_event;

/// Canvas mouse events, already translated to canvas coordinates by the
/// windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button went down
    Press(Point),
    /// Pointer moved with the button held; `from` is the previous position
    Drag { from: Point, to: Point },
    /// Button released; `origin` is where the press happened
    Release { origin: Point, at: Point },
    DoubleClick(Point),
}

impl InputEvent {
    /// Where the pointer is now.
    pub fn position(&self) -> Point {
        match *self {
            InputEvent::Press(at) | InputEvent::DoubleClick(at) => at,
            InputEvent::Drag { to, .. } => to,
            InputEvent::Release { at, .. } => at,
        }
    }

    /// Movement since the previous event; zero for clicks.
    pub fn delta(&self) -> Delta {
        match *self {
            InputEvent::Drag { from, to } => to - from,
            _ => Delta::ZERO,
        }
    }
}
