use std::collections::HashMap;

use crate::element::{Element, ElementId, ElementType, GroupId};
use crate::export::ExportView;
use crate::geometry::{BoundingBox, Point};
use crate::id_generator::IdGenerator;

/// The ordered collection of shapes on the canvas.
///
/// Shapes live in a map keyed by identity; paint order is a separate list of
/// identities, back to front. A shape's z-order rank is its index in that
/// list, so ranks are always dense and tie-free.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: HashMap<ElementId, ElementType>,
    z_order: Vec<ElementId>,
    ids: IdGenerator,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.z_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z_order.is_empty()
    }

    /// Add a shape on top of the z-order under a fresh identity.
    pub fn add(&mut self, mut shape: ElementType) -> ElementId {
        let id = self.ids.next_element();
        shape.set_id(id);
        if let Some(group) = shape.group() {
            self.ids.bump_past(id, Some(group));
        }
        log::debug!("Adding {} {}", shape.element_type(), id);
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Add a shape on top keeping its own identity. Returns `false`, leaving
    /// the scene untouched, when the identity is already present.
    pub(crate) fn insert(&mut self, shape: ElementType) -> bool {
        let id = shape.id();
        if self.shapes.contains_key(&id) {
            return false;
        }
        self.ids.bump_past(id, shape.group());
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        true
    }

    /// Remove a shape; the ranks above it close the gap.
    pub fn remove(&mut self, id: ElementId) -> Option<ElementType> {
        let shape = self.shapes.remove(&id)?;
        self.z_order.retain(|&other| other != id);
        Some(shape)
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementType> {
        self.shapes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Shapes in paint order, bottom first.
    pub fn all(&self) -> impl Iterator<Item = &ElementType> + '_ {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Identities in paint order, bottom first.
    pub fn ids(&self) -> &[ElementId] {
        &self.z_order
    }

    /// Paint position of a shape, 0 being the bottom.
    pub fn rank(&self, id: ElementId) -> Option<usize> {
        self.z_order.iter().position(|&other| other == id)
    }

    /// Swap a shape with the one directly above it. Returns `false` when the
    /// shape is absent or already on top.
    pub fn raise(&mut self, id: ElementId) -> bool {
        match self.rank(id) {
            Some(pos) if pos + 1 < self.z_order.len() => {
                self.z_order.swap(pos, pos + 1);
                true
            }
            _ => false,
        }
    }

    /// Swap a shape with the one directly below it. Returns `false` when the
    /// shape is absent or already at the bottom.
    pub fn lower(&mut self, id: ElementId) -> bool {
        match self.rank(id) {
            Some(pos) if pos > 0 => {
                self.z_order.swap(pos, pos - 1);
                true
            }
            _ => false,
        }
    }

    /// Topmost shape whose geometry contains `point` exactly.
    pub fn top_identity_at(&self, point: Point) -> Option<ElementId> {
        self.top_identity_within(point, 0.0)
    }

    /// Topmost shape within `tolerance` pixels of `point`.
    pub fn top_identity_within(&self, point: Point, tolerance: f64) -> Option<ElementId> {
        self.z_order
            .iter()
            .rev()
            .find(|&&id| self.shapes.get(&id).is_some_and(|shape| shape.hit_test(point, tolerance)))
            .copied()
    }

    /// Every shape within `radius` of `point`, bottom first.
    pub fn ids_within(&self, point: Point, radius: f64) -> Vec<ElementId> {
        self.z_order
            .iter()
            .filter(|&&id| self.shapes.get(&id).is_some_and(|shape| shape.hit_test(point, radius)))
            .copied()
            .collect()
    }

    /// Stroke segments tagged with `group`, in paint order.
    pub fn group_members(&self, group: GroupId) -> Vec<ElementId> {
        self.z_order
            .iter()
            .filter(|&&id| self.shapes.get(&id).and_then(ElementType::group) == Some(group))
            .copied()
            .collect()
    }

    /// The shape itself, or every member of its stroke group.
    pub fn logical_members(&self, id: ElementId) -> Vec<ElementId> {
        match self.get(id).map(ElementType::group) {
            Some(Some(group)) => self.group_members(group),
            Some(None) => vec![id],
            None => Vec::new(),
        }
    }

    pub(crate) fn next_group(&mut self) -> GroupId {
        self.ids.next_group()
    }

    /// Remove every shape. The identity generator keeps counting so no
    /// identity is handed out twice.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
    }

    /// Union of the painted bounds of all shapes; `None` when empty.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.all()
            .map(Element::paint_rect)
            .reduce(|acc, rect| acc.union(&rect))
    }

    /// Read-only snapshot handed to an external rasterizer.
    pub fn export_view(&self) -> ExportView<'_> {
        ExportView {
            shapes: self.all().collect(),
            bounds: self.bounds(),
        }
    }
}
