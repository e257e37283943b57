use std::collections::BTreeSet;

use log::debug;

use tilesync_shared::ActionId;

/// Ids of actions already applied to the mirror.
///
/// Bounded: once `capacity` ids are held, inserting evicts the lowest id.
/// Ledger ids grow within a game, so the lowest ids are the ones that left
/// the history ring first. The capacity must cover every slot of the log,
/// see [`SeenActionSet::ensure_capacity`].
pub struct SeenActionSet {
    ids: BTreeSet<ActionId>,
    capacity: usize,
}

impl SeenActionSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: BTreeSet::new(),
            capacity: capacity.max(1),
        }
    }

    /// Raises the capacity to at least `min`. Never shrinks it.
    pub fn ensure_capacity(&mut self, min: usize) {
        if min > self.capacity {
            debug!(
                "Raising seen action capacity from {} to {}",
                self.capacity, min
            );
            self.capacity = min;
        }
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `true` if `id` was not seen before
    pub fn insert(&mut self, id: ActionId) -> bool {
        if !self.ids.insert(id) {
            return false;
        }
        while self.ids.len() > self.capacity {
            self.ids.pop_first();
        }
        true
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lowest id still remembered
    pub fn oldest(&self) -> Option<ActionId> {
        self.ids.first().copied()
    }
}
