//! The editing engine.
//!
//! An [`EditingSession`] owns the [`Scene`] being edited together with the
//! state that lives between mouse events: the current selection, the
//! freehand stroke being dragged, the vertices of a polygon that has not
//! been closed yet, and the clipboard. It is created once and passed by
//! reference to whatever dispatches user input; there is no global state.
//!
//! # Failure policy
//!
//! Referencing an identity that is not in the scene, closing a polygon after
//! fewer than three clicks and releasing a stroke that never moved are all
//! silent no-ops: the methods return `None`, `false` or an empty list.
//! Among the editing calls only [`EditingSession::rotate90`] on a rectangle,
//! ellipse or text reports an error; the caller disables rotation for those.
//!
//! # Stroke groups
//!
//! One continuous drag may be stored as several stroke segments sharing a
//! [`GroupId`]. Moving, rotating, recoloring, resizing, duplicating and
//! copying a stroke act on the whole group.

use std::path::Path;

use crate::element::{
    Color, Element, ElementId, ElementType, FontSpec, GroupId, ShapeStyle, StrokeStyle, factory,
};
use crate::error::{Result, SketchError};
use crate::geometry::{Delta, Point, QuarterTurn};
use crate::scene::Scene;

use super::persistence::{load_scene, save_scene};

/// Default number of points after which a freehand drag is split.
pub const DEFAULT_SEGMENT_LIMIT: usize = 256;

#[derive(Debug, Clone)]
struct PendingStroke {
    /// Assigned when the first segment is committed
    group: Option<GroupId>,
    points: Vec<Point>,
    style: StrokeStyle,
}

/// Detached copies of a shape (or of every segment of a stroke group).
#[derive(Debug, Clone)]
struct Clipboard {
    shapes: Vec<ElementType>,
    /// Index of the shape the user clicked when copying
    primary: usize,
    /// Point that lands on the paste position
    anchor: Point,
}

#[derive(Debug, Clone)]
pub struct EditingSession {
    scene: Scene,
    selection: Option<ElementId>,
    pending_stroke: Option<PendingStroke>,
    polygon: Vec<Point>,
    clipboard: Option<Clipboard>,
    segment_limit: usize,
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditingSession {
    pub fn new() -> Self {
        Self::with_scene(Scene::new())
    }

    pub fn with_scene(scene: Scene) -> Self {
        Self {
            scene,
            selection: None,
            pending_stroke: None,
            polygon: Vec::new(),
            clipboard: None,
            segment_limit: DEFAULT_SEGMENT_LIMIT,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Vertices clicked so far for the polygon being drawn.
    pub fn pending_polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// Points of the stroke segment being dragged, if any.
    pub fn pending_stroke(&self) -> Option<&[Point]> {
        self.pending_stroke.as_ref().map(|s| s.points.as_slice())
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Number of points after which a freehand drag is committed as a
    /// segment and continued in the same group. Values below 2 are raised
    /// to 2.
    pub fn set_segment_limit(&mut self, limit: usize) {
        self.segment_limit = limit.max(2);
    }

    // ---------------------------------------------------------------------
    // Freehand strokes

    /// Start a freehand stroke. A stroke still in progress is ended first.
    pub fn begin_stroke(&mut self, point: Point, style: StrokeStyle) {
        self.end_stroke();
        log::debug!("Begin stroke at {:?}", point);
        self.pending_stroke = Some(PendingStroke {
            group: None,
            points: vec![point],
            style,
        });
    }

    /// Add a point to the stroke in progress. Returns the segment committed
    /// when the stroke reached the segment limit.
    pub fn extend_stroke(&mut self, point: Point) -> Option<ElementId> {
        let limit = self.segment_limit;
        let pending = self.pending_stroke.as_mut()?;
        pending.points.push(point);
        if pending.points.len() < limit {
            return None;
        }

        let points = std::mem::replace(&mut pending.points, vec![point]);
        Some(Self::commit_segment(&mut self.scene, pending, points))
    }

    /// Finish the stroke in progress. A stroke of fewer than two points is
    /// dropped.
    pub fn end_stroke(&mut self) -> Option<ElementId> {
        let pending = self.pending_stroke.as_mut()?;
        if pending.points.len() < 2 {
            // A lone point left over after a segment split is not a discard.
            if pending.group.is_none() {
                log::warn!("Discarding stroke with {} point(s)", pending.points.len());
            }
            self.pending_stroke = None;
            return None;
        }

        let points = std::mem::take(&mut pending.points);
        let id = Self::commit_segment(&mut self.scene, pending, points);
        self.pending_stroke = None;
        Some(id)
    }

    fn commit_segment(scene: &mut Scene, pending: &mut PendingStroke, points: Vec<Point>) -> ElementId {
        let group = *pending.group.get_or_insert_with(|| scene.next_group());
        let count = points.len();
        let id = scene.add(factory::create_stroke(ElementId(0), group, points, pending.style.clone()));
        log::info!("Committed stroke {} ({} points) in group {}", id, count, group);
        id
    }

    // ---------------------------------------------------------------------
    // Placing shapes

    pub fn add_polygon_vertex(&mut self, point: Point) {
        self.polygon.push(point);
    }

    /// Commit the clicked vertices as a polygon. With fewer than three the
    /// vertices are dropped and nothing is added.
    pub fn close_polygon(&mut self, style: ShapeStyle) -> Option<ElementId> {
        let vertices = std::mem::take(&mut self.polygon);
        self.place_polygon(vertices, style)
    }

    /// Add a polygon from a ready-made vertex list.
    pub fn place_polygon(&mut self, vertices: Vec<Point>, style: ShapeStyle) -> Option<ElementId> {
        let count = vertices.len();
        match factory::create_polygon(ElementId(0), vertices, style) {
            Some(polygon) => Some(self.scene.add(polygon)),
            None => {
                log::warn!("Discarding polygon with {} vertices", count);
                None
            }
        }
    }

    pub fn place_rectangle(&mut self, corner1: Point, corner2: Point, style: ShapeStyle) -> ElementId {
        self.scene.add(factory::create_rectangle(ElementId(0), corner1, corner2, style))
    }

    pub fn place_ellipse(&mut self, corner1: Point, corner2: Point, style: ShapeStyle) -> ElementId {
        self.scene.add(factory::create_ellipse(ElementId(0), corner1, corner2, style))
    }

    /// Add a text label anchored at `point`. Empty content adds nothing.
    pub fn place_text(&mut self, point: Point, content: &str, font: FontSpec, color: Color) -> Option<ElementId> {
        if content.is_empty() {
            return None;
        }
        Some(self.scene.add(factory::create_text(ElementId(0), point, content, font, color)))
    }

    // ---------------------------------------------------------------------
    // Selection and editing

    /// Select the topmost shape containing `point`; clears the selection
    /// when there is none.
    pub fn select_at(&mut self, point: Point) -> Option<ElementId> {
        self.select_near(point, 0.0)
    }

    /// Like [`Self::select_at`], accepting shapes within `tolerance` pixels.
    pub fn select_near(&mut self, point: Point, tolerance: f64) -> Option<ElementId> {
        self.selection = self.scene.top_identity_within(point, tolerance);
        self.selection
    }

    /// Translate a shape, or its whole stroke group. Returns `false` when the
    /// identity is absent.
    pub fn move_by(&mut self, id: ElementId, delta: Delta) -> bool {
        let members = self.scene.logical_members(id);
        for member in &members {
            if let Some(shape) = self.scene.get_mut(*member) {
                shape.translate(delta);
            }
        }
        !members.is_empty()
    }

    /// Turn a stroke group or polygon a quarter turn about the mean of its
    /// vertices. Four turns in a row restore the shape exactly. Returns
    /// `Ok(false)` when the identity is absent.
    pub fn rotate90(&mut self, id: ElementId) -> Result<bool> {
        let Some(shape) = self.scene.get(id) else {
            return Ok(false);
        };
        if !shape.kind().is_rotatable() {
            return Err(SketchError::UnsupportedOperation {
                operation: "rotate",
                kind: shape.element_type(),
            });
        }

        let members = self.scene.logical_members(id);
        let all_vertices: Vec<Point> = members
            .iter()
            .filter_map(|m| self.scene.get(*m))
            .filter_map(ElementType::vertices)
            .flatten()
            .copied()
            .collect();
        let Some(turn) = QuarterTurn::about_mean(&all_vertices) else {
            return Ok(false);
        };

        for member in &members {
            if let Some(shape) = self.scene.get_mut(*member) {
                if let Some(vertices) = shape.vertices() {
                    let turned = turn.apply_all(vertices);
                    shape.replace_vertices(turned);
                }
            }
        }
        log::debug!("Rotated {} about {:?}", id, turn.pivot());
        Ok(true)
    }

    /// Remove every shape within `radius` of `point`.
    pub fn erase_at(&mut self, point: Point, radius: f64) -> Vec<ElementId> {
        let hits = self.scene.ids_within(point, radius);
        self.remove_all(&hits);
        hits
    }

    /// Remove the topmost shape at `point`; for a stroke, remove every
    /// segment of its group.
    pub fn erase_whole_group(&mut self, point: Point) -> Vec<ElementId> {
        self.erase_whole_group_near(point, 0.0)
    }

    /// Like [`Self::erase_whole_group`], accepting shapes within `tolerance`.
    pub fn erase_whole_group_near(&mut self, point: Point, tolerance: f64) -> Vec<ElementId> {
        let Some(top) = self.scene.top_identity_within(point, tolerance) else {
            return Vec::new();
        };
        let members = self.scene.logical_members(top);
        self.remove_all(&members);
        members
    }

    fn remove_all(&mut self, ids: &[ElementId]) {
        for id in ids {
            self.scene.remove(*id);
        }
        if self.selection.is_some_and(|selected| ids.contains(&selected)) {
            self.selection = None;
        }
        if !ids.is_empty() {
            log::info!("Removed {} shape(s)", ids.len());
        }
    }

    /// Copy a shape (or its whole stroke group) offset by `delta` onto the
    /// top of the z-order. Returns the identity of the copy of `id`.
    pub fn duplicate(&mut self, id: ElementId, delta: Delta) -> Option<ElementId> {
        let shapes = self.cloned_members(id)?;
        let primary = shapes.iter().position(|shape| shape.id() == id)?;
        self.insert_copies(shapes, primary, delta)
    }

    fn cloned_members(&self, id: ElementId) -> Option<Vec<ElementType>> {
        let members = self.scene.logical_members(id);
        if members.is_empty() {
            return None;
        }
        Some(members.iter().filter_map(|m| self.scene.get(*m)).cloned().collect())
    }

    fn insert_copies(&mut self, shapes: Vec<ElementType>, primary: usize, delta: Delta) -> Option<ElementId> {
        let group = shapes
            .iter()
            .any(|shape| shape.group().is_some())
            .then(|| self.scene.next_group());

        let mut primary_id = None;
        for (index, mut shape) in shapes.into_iter().enumerate() {
            shape.translate(delta);
            if let Some(group) = group {
                shape.set_group(group);
            }
            let new_id = self.scene.add(shape);
            if index == primary {
                primary_id = Some(new_id);
            }
        }
        primary_id
    }

    pub fn raise_layer(&mut self, id: ElementId) -> bool {
        self.scene.raise(id)
    }

    pub fn lower_layer(&mut self, id: ElementId) -> bool {
        self.scene.lower(id)
    }

    pub fn recolor(&mut self, id: ElementId, color: Color) -> bool {
        let members = self.scene.logical_members(id);
        for member in &members {
            if let Some(shape) = self.scene.get_mut(*member) {
                shape.set_color(color.clone());
            }
        }
        !members.is_empty()
    }

    /// Line width of a stroke group, outline width of a closed shape, font
    /// size of a text label.
    pub fn set_width(&mut self, id: ElementId, width: f64) -> bool {
        let members = self.scene.logical_members(id);
        for member in &members {
            if let Some(shape) = self.scene.get_mut(*member) {
                shape.set_width(width);
            }
        }
        !members.is_empty()
    }

    // ---------------------------------------------------------------------
    // Clipboard

    /// Put a detached copy of the shape (or stroke group) on the clipboard.
    pub fn copy(&mut self, id: ElementId) -> bool {
        let Some(shapes) = self.cloned_members(id) else {
            return false;
        };
        let Some(primary) = shapes.iter().position(|shape| shape.id() == id) else {
            return false;
        };
        // A group is anchored on its oldest segment, where the drag began.
        let Some(anchor) = shapes.iter().min_by_key(|shape| shape.id()).map(ElementType::paste_origin) else {
            return false;
        };
        self.clipboard = Some(Clipboard {
            shapes,
            primary,
            anchor,
        });
        log::debug!("Copied {}", id);
        true
    }

    /// Paste the clipboard so its anchor lands on `point`.
    pub fn paste_at(&mut self, point: Point) -> Option<ElementId> {
        let clipboard = self.clipboard.clone()?;
        self.insert_copies(clipboard.shapes, clipboard.primary, point - clipboard.anchor)
    }

    /// Remove every shape and drop all in-progress input. Identities keep
    /// counting up and the clipboard survives.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.selection = None;
        self.pending_stroke = None;
        self.polygon.clear();
        log::info!("Cleared canvas");
    }

    // ---------------------------------------------------------------------
    // Files

    pub fn save_to(&self, path: &Path) -> Result<()> {
        save_scene(&self.scene, path)
    }

    /// Replace the scene with the one stored at `path`. On failure the
    /// current scene and selection are left untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        let scene = load_scene(path)?;
        self.scene = scene;
        self.selection = None;
        self.pending_stroke = None;
        self.polygon.clear();
        Ok(())
    }
}
