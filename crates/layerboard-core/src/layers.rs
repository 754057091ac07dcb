//! Stacking order.
//!
//! Every element carries a `z_index` drawn from a single store-wide counter
//! that only ever grows. Raising an element hands it a fresh counter value;
//! moving it one step swaps keys with its neighbour. Both keep the keys
//! unique.

use crate::element::ElementId;
use crate::store::ElementStore;

/// Owner of the z-index counter.
#[derive(Debug, Clone)]
pub struct LayerOrder {
    /// Next z-index to hand out.
    z_counter: i64,
}

impl Default for LayerOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerOrder {
    /// First z-index handed out.
    pub const FIRST_Z: i64 = 1;

    pub fn new() -> Self {
        Self {
            z_counter: Self::FIRST_Z,
        }
    }

    /// Resume from a persisted counter.
    pub fn with_counter(z_counter: i64) -> Self {
        Self { z_counter }
    }

    /// The next value [`next_z`](Self::next_z) will return.
    pub fn counter(&self) -> i64 {
        self.z_counter
    }

    /// Take the next z-index.
    pub fn next_z(&mut self) -> i64 {
        let z = self.z_counter;
        self.z_counter += 1;
        z
    }

    /// Put an element on top of everything.
    /// Returns false if the element does not exist.
    pub fn bring_to_front(&mut self, store: &mut ElementStore, id: ElementId) -> bool {
        if !store.contains(id) {
            return false;
        }
        let z = self.next_z();
        if let Some(element) = store.find_mut(id) {
            element.z_index = z;
        }
        true
    }

    /// Make the key set consistent after a restore.
    ///
    /// Duplicate keys are renumbered from the counter (store order decides
    /// who keeps theirs), and the counter is moved past the largest key.
    pub fn repair(&mut self, store: &mut ElementStore) {
        let max_z = store.iter().map(|e| e.z_index).max();
        if let Some(max_z) = max_z {
            self.z_counter = self.z_counter.max(max_z + 1);
        }

        let mut seen = std::collections::HashSet::new();
        let duplicates: Vec<ElementId> = store
            .iter()
            .filter(|e| !seen.insert(e.z_index))
            .map(|e| e.id())
            .collect();
        for id in duplicates {
            log::warn!("Element {} shares a z-index, moving it to the front", id);
            self.bring_to_front(store, id);
        }
    }
}

/// Element ids from top-most to bottom-most.
pub fn ordered_desc(store: &ElementStore) -> Vec<ElementId> {
    let mut elements: Vec<_> = store.iter().map(|e| (e.z_index, e.id())).collect();
    elements.sort_by(|a, b| b.0.cmp(&a.0));
    elements.into_iter().map(|(_, id)| id).collect()
}

/// Position of an element in top-to-bottom order (0 = top).
pub fn rank(store: &ElementStore, id: ElementId) -> Option<usize> {
    ordered_desc(store).iter().position(|&other| other == id)
}

/// Move an element one step towards the front by swapping keys with the
/// element directly above it. Returns true if anything moved.
pub fn move_up(store: &mut ElementStore, id: ElementId) -> bool {
    let sorted = ordered_desc(store);
    let Some(index) = sorted.iter().position(|&other| other == id) else {
        return false;
    };
    if index == 0 {
        return false;
    }
    swap_z(store, id, sorted[index - 1]);
    true
}

/// Move an element one step towards the back by swapping keys with the
/// element directly below it. Returns true if anything moved.
pub fn move_down(store: &mut ElementStore, id: ElementId) -> bool {
    let sorted = ordered_desc(store);
    let Some(index) = sorted.iter().position(|&other| other == id) else {
        return false;
    };
    if index + 1 >= sorted.len() {
        return false;
    }
    swap_z(store, id, sorted[index + 1]);
    true
}

fn swap_z(store: &mut ElementStore, a: ElementId, b: ElementId) {
    let (Some(za), Some(zb)) = (
        store.find(a).map(|e| e.z_index),
        store.find(b).map(|e| e.z_index),
    ) else {
        return;
    };
    if let Some(element) = store.find_mut(a) {
        element.z_index = zb;
    }
    if let Some(element) = store.find_mut(b) {
        element.z_index = za;
    }
}
