use crate::element::{Color, ElementId, ShapeKind};
use crate::error::Result;
use crate::geometry::{Delta, Point};
use crate::settings::{FONT_SIZE_RANGE, LINE_WIDTH_RANGE, Settings};
use crate::state::EditingSession;
use crate::tools::{EraserSize, circle_corners, square_corners, triangle_vertices};

/// One call into the editing engine, produced from user input by
/// [`crate::input::route_event`] or issued directly by menus.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginStroke(Point),
    ExtendStroke(Point),
    EndStroke,

    /// Pick the shape under the cursor as the current selection
    SelectAt(Point),
    /// Drag the current selection
    MoveSelection(Delta),

    /// Circle centred on `center` passing through `rim`
    PlaceCircle { center: Point, rim: Point },
    /// Square spanned by a drag
    PlaceSquare { origin: Point, at: Point },
    /// Triangle standing on `base`, as tall as the drag is long
    PlaceTriangle { base: Point, at: Point },
    AddPolygonVertex(Point),
    ClosePolygon,

    /// Ask the UI for the text to place at this point
    RequestText(Point),
    PlaceText { at: Point, content: String },

    /// Remove the shape under the cursor, or its whole stroke group
    RemoveAt(Point),
    EraseAt { at: Point, size: EraserSize },

    CopyAt(Point),
    PasteAt(Point),
    RotateAt(Point),
    /// Copy the selection offset by the configured paste offset
    DuplicateSelection,

    // Context menu actions, applied to the current selection
    SetWidth(f64),
    Recolor(Color),
    Raise,
    Lower,

    /// Remove everything
    Clear,
}

/// What executing a [`Command`] did, for the UI to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Nothing,
    Created(ElementId),
    Selected(Option<ElementId>),
    Removed(Vec<ElementId>),
    TextRequested(Point),
    Copied(bool),
    Moved(ElementId),
    Rotated(ElementId),
    Restacked(bool),
    Restyled(bool),
    Cleared,
}

impl From<Option<ElementId>> for Outcome {
    fn from(created: Option<ElementId>) -> Self {
        created.map_or(Outcome::Nothing, Outcome::Created)
    }
}

impl Command {
    /// Run the command against the session using the current style settings.
    ///
    /// Only rotating a shape that cannot be rotated is an error; commands
    /// that find nothing to act on return [`Outcome::Nothing`].
    pub fn execute(&self, session: &mut EditingSession, settings: &Settings) -> Result<Outcome> {
        let outcome = match self {
            Command::BeginStroke(at) => {
                session.set_segment_limit(settings.max_stroke_points);
                session.begin_stroke(*at, settings.stroke_style());
                Outcome::Nothing
            }
            Command::ExtendStroke(to) => session.extend_stroke(*to).into(),
            Command::EndStroke => session.end_stroke().into(),

            Command::SelectAt(at) => Outcome::Selected(session.select_near(*at, settings.select_tolerance)),
            Command::MoveSelection(delta) => match session.selection() {
                Some(id) if session.move_by(id, *delta) => Outcome::Moved(id),
                _ => Outcome::Nothing,
            },

            Command::PlaceCircle { center, rim } => {
                let (a, b) = circle_corners(*center, *rim);
                Outcome::Created(session.place_ellipse(a, b, settings.shape_style()))
            }
            Command::PlaceSquare { origin, at } => {
                let (a, b) = square_corners(*origin, *at);
                Outcome::Created(session.place_rectangle(a, b, settings.shape_style()))
            }
            Command::PlaceTriangle { base, at } => {
                let vertices = triangle_vertices(*base, *at).to_vec();
                session.place_polygon(vertices, settings.shape_style()).into()
            }
            Command::AddPolygonVertex(at) => {
                session.add_polygon_vertex(*at);
                Outcome::Nothing
            }
            Command::ClosePolygon => session.close_polygon(settings.shape_style()).into(),

            Command::RequestText(at) => Outcome::TextRequested(*at),
            Command::PlaceText { at, content } => session
                .place_text(*at, content, settings.font.clone(), settings.color.clone())
                .into(),

            Command::RemoveAt(at) => Outcome::Removed(session.erase_whole_group_near(*at, settings.select_tolerance)),
            Command::EraseAt { at, size } => Outcome::Removed(session.erase_at(*at, settings.eraser_radius(*size))),

            Command::CopyAt(at) => {
                let copied = session
                    .select_near(*at, settings.select_tolerance)
                    .is_some_and(|id| session.copy(id));
                Outcome::Copied(copied)
            }
            Command::PasteAt(at) => session.paste_at(*at).into(),
            Command::RotateAt(at) => match session.select_near(*at, settings.select_tolerance) {
                Some(id) => {
                    if session.rotate90(id)? {
                        Outcome::Rotated(id)
                    } else {
                        Outcome::Nothing
                    }
                }
                None => Outcome::Nothing,
            },
            Command::DuplicateSelection => match session.selection() {
                Some(id) => session.duplicate(id, settings.paste_delta()).into(),
                None => Outcome::Nothing,
            },

            Command::SetWidth(width) => Outcome::Restyled(session.selection().is_some_and(|id| {
                let range = match session.scene().get(id).map(|shape| shape.kind()) {
                    Some(ShapeKind::Text) => FONT_SIZE_RANGE,
                    _ => LINE_WIDTH_RANGE,
                };
                session.set_width(id, width.clamp(range.0, range.1))
            })),
            Command::Recolor(color) => {
                Outcome::Restyled(session.selection().is_some_and(|id| session.recolor(id, color.clone())))
            }
            Command::Raise => Outcome::Restacked(session.selection().is_some_and(|id| session.raise_layer(id))),
            Command::Lower => Outcome::Restacked(session.selection().is_some_and(|id| session.lower_layer(id))),

            Command::Clear => {
                session.clear();
                Outcome::Cleared
            }
        };

        log::debug!("{:?} -> {:?}", self, outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn context_menu_acts_on_selection() {
        let mut session = EditingSession::new();
        let settings = Settings::default();
        let id = Command::PlaceSquare {
            origin: Point::ORIGIN,
            at: Point::new(10.0, 10.0),
        }
        .execute(&mut session, &settings)
        .unwrap();
        let Outcome::Created(id) = id else {
            panic!("square not created");
        };

        // Nothing selected yet
        assert_eq!(
            Command::Recolor(Color::new("red")).execute(&mut session, &settings).unwrap(),
            Outcome::Restyled(false)
        );

        Command::SelectAt(Point::new(5.0, 5.0)).execute(&mut session, &settings).unwrap();
        Command::Recolor(Color::new("red")).execute(&mut session, &settings).unwrap();
        Command::SetWidth(40.0).execute(&mut session, &settings).unwrap();

        let shape = session.scene().get(id).unwrap();
        assert_eq!(shape.color().as_str(), "red");
        assert_eq!(shape.width(), 10.0);
    }

    #[test]
    fn rotate_at_reports_unsupported_kind() {
        let mut session = EditingSession::new();
        let settings = Settings::default();
        Command::PlaceCircle {
            center: Point::new(5.0, 5.0),
            rim: Point::new(5.0, 8.0),
        }
        .execute(&mut session, &settings)
        .unwrap();

        assert!(Command::RotateAt(Point::new(5.0, 5.0)).execute(&mut session, &settings).is_err());
        assert_eq!(
            Command::RotateAt(Point::new(50.0, 50.0)).execute(&mut session, &settings).unwrap(),
            Outcome::Nothing
        );
    }

    #[test]
    fn duplicate_uses_paste_offset() {
        let mut session = EditingSession::new();
        let settings = Settings::default();
        let triangle = Command::PlaceTriangle {
            base: Point::new(20.0, 20.0),
            at: Point::new(20.0, 30.0),
        }
        .execute(&mut session, &settings)
        .unwrap();
        assert!(matches!(triangle, Outcome::Created(_)));

        Command::SelectAt(Point::new(20.0, 15.0)).execute(&mut session, &settings).unwrap();
        let Outcome::Created(copy) = Command::DuplicateSelection.execute(&mut session, &settings).unwrap() else {
            panic!("nothing duplicated");
        };
        let apex = session.scene().get(copy).unwrap().vertices().unwrap()[0];
        assert_eq!(apex, Point::new(30.0, 20.0));
        assert_eq!(session.scene().rank(copy), Some(1));
    }

    #[test]
    fn eraser_size_picks_radius() {
        let mut session = EditingSession::new();
        let settings = Settings::default();
        session.place_rectangle(Point::ORIGIN, Point::new(10.0, 10.0), settings.shape_style());
        let near = Point::new(20.0, 5.0);

        let small = Command::EraseAt { at: near, size: EraserSize::Small };
        assert_eq!(small.execute(&mut session, &settings).unwrap(), Outcome::Removed(vec![]));

        let large = Command::EraseAt { at: near, size: EraserSize::Large };
        let Outcome::Removed(removed) = large.execute(&mut session, &settings).unwrap() else {
            panic!("unexpected outcome");
        };
        assert_eq!(removed.len(), 1);
        assert!(session.scene().is_empty());
    }
}
