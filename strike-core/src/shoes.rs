use std::collections::HashMap;
use strike_shared::{ShoeEntry, ShoeId};

/// Ordered, id-keyed list of shoe-size entries.
///
/// Entries live in insertion-ordered slots; `index` maps an id to its slot.
/// Removal empties the slot instead of shifting, so it is O(1) and never
/// reshuffles the remaining entries. Empty slots are compacted away once
/// they make up more than half of the storage.
#[derive(Debug, Clone, Default)]
pub struct ShoeList {
    slots: Vec<Option<ShoeEntry>>,
    index: HashMap<ShoeId, usize>,
}

const COMPACT_MIN_SLOTS: usize = 8;

impl ShoeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty entry under a fresh id.
    pub fn add(&mut self) -> ShoeId {
        let id = ShoeId::new();
        self.index.insert(id, self.slots.len());
        self.slots.push(Some(ShoeEntry::new(id)));
        id
    }

    /// Remove the entry with `id`; no-op if it is not present.
    pub fn remove(&mut self, id: &ShoeId) -> Option<ShoeEntry> {
        let slot = self.index.remove(id)?;
        let entry = self.slots.get_mut(slot).and_then(Option::take);
        self.maybe_compact();
        entry
    }

    /// Replace the size of the entry with `id`. Returns whether it existed.
    pub fn update_size(&mut self, id: &ShoeId, value: &str) -> bool {
        match self.get_mut(id) {
            Some(entry) => {
                entry.set_size(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &ShoeId) -> Option<&ShoeEntry> {
        let slot = *self.index.get(id)?;
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: &ShoeId) -> Option<&mut ShoeEntry> {
        let slot = *self.index.get(id)?;
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoeEntry> + '_ {
        self.slots.iter().flatten()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<ShoeId> {
        self.iter().map(|entry| entry.id).collect()
    }

    /// Sizes in display order, as sent to the booking API.
    pub fn sizes(&self) -> Vec<String> {
        self.iter().map(|entry| entry.size.clone()).collect()
    }

    pub fn all_filled(&self) -> bool {
        self.iter().all(ShoeEntry::is_filled)
    }

    fn maybe_compact(&mut self) {
        let empty = self.slots.len() - self.index.len();
        if self.slots.len() < COMPACT_MIN_SLOTS || empty * 2 <= self.slots.len() {
            return;
        }
        self.slots.retain(Option::is_some);
        for (slot, entry) in self.slots.iter().flatten().enumerate() {
            self.index.insert(entry.id, slot);
        }
    }
}
