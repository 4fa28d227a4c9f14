use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Group, Person};
use crate::ids::{GroupKey, PersonId};

/// Default for `rank_threshold` on a new scheme.
pub const DEFAULT_RANK_THRESHOLD: u32 = 2;

/// Aggregate root: everyone, every group, and the scoring switch.
///
/// A `Scheme` is a plain value. Components that need it take it explicitly;
/// there is no ambient instance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Scheme {
    pub title: String,
    pub people: Vec<Person>,
    pub groups: Vec<Group>,
    /// Score placements by group preference instead of by connections.
    pub use_group_preferences: bool,
    /// Highest preference rank that counts as a highlight match.
    pub rank_threshold: u32,
}

impl Scheme {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            people: Vec::new(),
            groups: Vec::new(),
            use_group_preferences: true,
            rank_threshold: DEFAULT_RANK_THRESHOLD,
        }
    }

    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    pub fn person_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn group(&self, key: &GroupKey) -> Option<&Group> {
        self.groups.iter().find(|g| &g.key == key)
    }

    pub fn group_mut(&mut self, key: &GroupKey) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| &g.key == key)
    }

    /// The group holding `id` and the slot it occupies, first match in group order.
    #[must_use]
    pub fn group_of(&self, id: &PersonId) -> Option<(&Group, usize)> {
        self.groups
            .iter()
            .find_map(|group| group.slot_of(id).map(|slot| (group, slot)))
    }

    #[must_use]
    pub fn is_assigned(&self, id: &PersonId) -> bool {
        self.groups.iter().any(|group| group.contains(id))
    }

    /// People not occupying any slot, in people order.
    #[must_use]
    pub fn unassigned(&self) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| !self.is_assigned(&person.id))
            .collect()
    }

    /// Removes `id` from every group.
    pub fn unassign(&mut self, id: &PersonId) -> bool {
        let mut removed = false;
        for group in &mut self.groups {
            removed |= group.remove(id);
        }
        removed
    }

    /// Smallest occupied-slot count across all groups, `None` with no groups.
    #[must_use]
    pub fn min_occupied(&self) -> Option<usize> {
        self.groups.iter().map(Group::occupied_count).min()
    }
}
