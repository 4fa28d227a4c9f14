use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Layout;
use crate::errors::CoreError;
use crate::ids::{GroupKey, PersonId};

/// Largest `max_size` accepted from bulk input or snapshots.
pub const MAX_GROUP_SIZE: u32 = 10_000;

/// A capacity-bounded group with a fixed slot array.
///
/// `slots` normally has `max_size` entries; a decoded snapshot may carry a
/// different length, which the validator reports when it overflows capacity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    pub title: String,
    pub max_size: u32,
    pub slots: Vec<Option<PersonId>>,
    pub layout: Layout,
}

impl Group {
    /// Creates an empty group whose key is its title.
    pub fn new(title: impl Into<String>, max_size: u32) -> Self {
        let title = title.into();
        Self::with_key(GroupKey::new(title.clone()), title, max_size)
    }

    pub fn with_key(key: impl Into<GroupKey>, title: impl Into<String>, max_size: u32) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            max_size,
            slots: vec![None; max_size as usize],
            layout: Layout::default(),
        }
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_size as usize
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() >= self.capacity()
    }

    #[must_use]
    pub fn has_available_slot(&self) -> bool {
        !self.is_full() && self.first_free_slot().is_some()
    }

    #[must_use]
    pub fn first_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupants in slot order.
    pub fn members(&self) -> impl Iterator<Item = &PersonId> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn contains(&self, id: &PersonId) -> bool {
        self.members().any(|member| member == id)
    }

    #[must_use]
    pub fn slot_of(&self, id: &PersonId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(id))
    }

    /// Empties every slot holding `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &PersonId) -> bool {
        let mut removed = false;
        for slot in &mut self.slots {
            if slot.as_ref() == Some(id) {
                *slot = None;
                removed = true;
            }
        }
        removed
    }

    /// Places `id` in the first free slot, returning the slot index.
    pub fn place(&mut self, id: PersonId) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let slot = self.first_free_slot()?;
        self.slots[slot] = Some(id);
        Some(slot)
    }

    /// Places `id` at `slot` if that slot is free, otherwise in the first free slot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SlotOutOfRange` when `slot` is past the slot array.
    pub fn place_at(&mut self, id: PersonId, slot: usize) -> Result<Option<usize>, CoreError> {
        let len = self.slots.len();
        if slot >= len {
            return Err(CoreError::SlotOutOfRange {
                group: self.key.to_string(),
                slot,
                len,
            });
        }
        if self.slots[slot].is_none() && !self.is_full() {
            self.slots[slot] = Some(id);
            return Ok(Some(slot));
        }
        Ok(self.place(id))
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
