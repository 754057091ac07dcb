//! Element store: identity, lookup and insertion order.

use crate::element::{Element, ElementId, ElementKind};
use std::collections::HashMap;

/// Ordered collection of element records.
///
/// Elements are keyed by id for lookup; a separate id list keeps insertion
/// order for iteration. Visual stacking is purely a function of `z_index`
/// and is handled by [`crate::layers`].
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    /// All elements, keyed by id.
    elements: HashMap<ElementId, Element>,
    /// Insertion order.
    order: Vec<ElementId>,
    /// Last id handed out (0 = none yet).
    last_id: ElementId,
}

impl ElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element of `kind` with the next id and append it.
    ///
    /// The stacking key comes from the caller, which owns the z counter.
    pub fn create(&mut self, kind: ElementKind, z_index: i64) -> &Element {
        self.last_id += 1;
        let id = self.last_id;
        let element = Element::new(id, kind, self.order.len(), z_index);
        self.order.push(id);
        self.elements.entry(id).or_insert(element)
    }

    /// Remove an element. Returns `None` if it was not present.
    pub fn delete(&mut self, id: ElementId) -> Option<Element> {
        let removed = self.elements.remove(&id)?;
        self.order.retain(|&existing| existing != id);
        Some(removed)
    }

    /// Get an element by id.
    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by id.
    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The id counter (last id assigned).
    pub fn last_id(&self) -> ElementId {
        self.last_id
    }

    /// Replace the contents with restored records.
    ///
    /// The id counter never drops below the largest restored id, so ids are
    /// not reused even when the saved counter is stale. Records with an id
    /// already seen are dropped.
    pub fn restore(&mut self, elements: Vec<Element>, last_id: ElementId) {
        self.elements.clear();
        self.order.clear();
        let mut max_id = last_id;
        for element in elements {
            let id = element.id;
            if self.elements.contains_key(&id) {
                log::warn!("Dropping restored element with duplicate id {}", id);
                continue;
            }
            max_id = max_id.max(id);
            self.order.push(id);
            self.elements.insert(id, element);
        }
        self.last_id = max_id;
    }
}
