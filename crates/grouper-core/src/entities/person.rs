use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Layout;
use crate::ids::{GroupKey, PersonId};

/// An individual to be placed into a group.
///
/// Connections are stored per person and are not required to be symmetric:
/// A listing B says nothing about whether B lists A.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    /// People this person would like to be grouped with.
    pub connections: Vec<PersonId>,
    /// Preferred groups, most preferred first.
    pub group_preferences: Vec<GroupKey>,
    /// Cached happiness score, see [`crate::happiness`].
    pub happiness: i32,
    pub layout: Layout,
}

impl Person {
    pub fn new(
        id: impl Into<PersonId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            connections: Vec::new(),
            group_preferences: Vec::new(),
            happiness: 0,
            layout: Layout::default(),
        }
    }

    #[must_use]
    pub fn with_connections<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PersonId>,
    {
        self.connections = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_preferences<I, T>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<GroupKey>,
    {
        self.group_preferences = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn is_connected_to(&self, other: &PersonId) -> bool {
        self.connections.contains(other)
    }

    /// 1-based rank of `key` in this person's preferences.
    #[must_use]
    pub fn preference_rank(&self, key: &GroupKey) -> Option<usize> {
        self.group_preferences
            .iter()
            .position(|k| k == key)
            .map(|index| index + 1)
    }
}
