use crate::element::{ElementId, GroupId};

/// Largest element or group identity a document may carry. Anything above it
/// is rejected on load, which keeps the counters far from `u64::MAX`.
pub const MAX_ID: u64 = (1 << 53) - 1;

/// Hands out shape identities and stroke group identifiers.
///
/// Each scene owns one generator; values only ever grow, so an identity
/// removed from the scene is never handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_element: u64,
    next_group: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            next_element: 1,
            next_group: 1,
        }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_element(&mut self) -> ElementId {
        let id = ElementId(self.next_element);
        self.next_element = self.next_element.saturating_add(1);
        id
    }

    pub fn next_group(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group = self.next_group.saturating_add(1);
        id
    }

    /// Make sure neither value at or below the given ones is issued again.
    pub fn bump_past(&mut self, element: ElementId, group: Option<GroupId>) {
        self.next_element = self.next_element.max(element.0.saturating_add(1));
        if let Some(group) = group {
            self.next_group = self.next_group.max(group.0.saturating_add(1));
        }
    }
}
