//! The editor: store, selection, gestures and layering behind one API.
//!
//! Pointer positions come in as client coordinates and are converted to
//! canvas-local ones with the current [`CanvasFrame`]. Every state change is
//! reported as an [`EditorEvent`]; the shell drains them after each input.

use crate::element::{Element, ElementId, ElementKind};
use crate::geometry::{self, CanvasFrame};
use crate::input::Key;
use crate::layers::{self, LayerOrder};
use crate::manipulation::{ManipulationMode, Manipulator};
use crate::properties::{self, PropertyField};
use crate::selection::{self, GestureTarget, HandleKind, HANDLE_HIT_TOLERANCE, Selection};
use crate::snapshot::Snapshot;
use crate::store::ElementStore;
use kurbo::Point;

/// Change notifications for whoever renders the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The selection moved to another element or was cleared.
    SelectionChanged(Option<ElementId>),
    /// Position, size or rotation of an element changed.
    GeometryChanged(ElementId),
    /// Styles or text of an element changed.
    ContentChanged(ElementId),
    /// Stacking order changed.
    LayersChanged,
    ElementAdded(ElementId),
    ElementRemoved(ElementId),
    /// A change worth persisting was committed.
    SaveRequested,
}

#[derive(Debug, Clone)]
pub struct Editor {
    store: ElementStore,
    layers: LayerOrder,
    selection: Selection,
    manipulator: Manipulator,
    frame: CanvasFrame,
    /// Text element whose content is being edited.
    editing_text: Option<ElementId>,
    /// Set when the properties panel needs a refresh.
    properties_dirty: bool,
    events: Vec<EditorEvent>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(CanvasFrame::default())
    }
}

impl Editor {
    pub fn new(frame: CanvasFrame) -> Self {
        Self {
            store: ElementStore::new(),
            layers: LayerOrder::new(),
            selection: Selection::new(),
            manipulator: Manipulator::new(),
            frame,
            editing_text: None,
            properties_dirty: false,
            events: Vec::new(),
        }
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn frame(&self) -> CanvasFrame {
        self.frame
    }

    /// Update the canvas placement, e.g. after a window resize.
    pub fn set_frame(&mut self, frame: CanvasFrame) {
        self.frame = frame;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected().and_then(|id| self.store.find(id))
    }

    pub fn mode(&self) -> ManipulationMode {
        self.manipulator.mode()
    }

    pub fn editing_text(&self) -> Option<ElementId> {
        self.editing_text
    }

    /// Next z-index the layer counter will hand out.
    pub fn z_counter(&self) -> i64 {
        self.layers.counter()
    }

    /// Elements from top-most to bottom-most, as the layers panel lists them.
    pub fn layers(&self) -> Vec<&Element> {
        layers::ordered_desc(&self.store)
            .into_iter()
            .filter_map(|id| self.store.find(id))
            .collect()
    }

    fn emit(&mut self, event: EditorEvent) {
        self.events.push(event);
    }

    fn request_save(&mut self) {
        self.emit(EditorEvent::SaveRequested);
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// True once after anything the properties panel shows has changed.
    pub fn take_properties_dirty(&mut self) -> bool {
        std::mem::take(&mut self.properties_dirty)
    }

    // --- Elements ---

    /// Create an element and select it.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let z = self.layers.next_z();
        let id = self.store.create(kind, z).id();
        log::debug!("Added {} {}", kind, id);
        self.emit(EditorEvent::ElementAdded(id));
        self.select(id);
        self.request_save();
        id
    }

    /// Remove an element. Returns false if it did not exist.
    pub fn delete(&mut self, id: ElementId) -> bool {
        if self.store.delete(id).is_none() {
            return false;
        }
        log::debug!("Deleted element {}", id);
        self.manipulator.abandon(id);
        if self.editing_text == Some(id) {
            self.editing_text = None;
        }
        if self.selection.forget(id) {
            self.emit(EditorEvent::SelectionChanged(None));
            self.properties_dirty = true;
        }
        self.emit(EditorEvent::ElementRemoved(id));
        self.emit(EditorEvent::LayersChanged);
        self.request_save();
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected() {
            Some(id) => self.delete(id),
            None => false,
        }
    }

    // --- Selection ---

    /// Select an element and raise it to the front.
    /// Selecting a missing id does nothing.
    pub fn select(&mut self, id: ElementId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        if self.editing_text.is_some_and(|editing| editing != id) {
            self.end_text_edit();
        }
        self.selection.select(id);
        self.layers.bring_to_front(&mut self.store, id);
        self.properties_dirty = true;
        self.emit(EditorEvent::SelectionChanged(Some(id)));
        self.emit(EditorEvent::LayersChanged);
        true
    }

    pub fn clear_selection(&mut self) {
        self.end_text_edit();
        if self.selection.clear().is_some() {
            self.properties_dirty = true;
            self.emit(EditorEvent::SelectionChanged(None));
        }
    }

    /// A press on empty canvas.
    /// A gesture cut short here still keeps what it already moved.
    pub fn press_background(&mut self) {
        if self.manipulator.end().is_some() {
            self.request_save();
        }
        self.clear_selection();
    }

    // --- Pointer ---

    /// What a press at `client` would land on.
    ///
    /// Handles of the selected element come first, then element bodies from
    /// the top down. Bodies are tested in their rotated frame.
    pub fn hit_test(&self, client: Point) -> GestureTarget {
        let point = self.frame.to_local(client);

        if let Some(element) = self.selected_element() {
            match selection::hit_test_handles(element, point, HANDLE_HIT_TOLERANCE) {
                Some(HandleKind::Rotate) => return GestureTarget::Rotate(element.id()),
                Some(HandleKind::Corner(corner)) => {
                    return GestureTarget::Resize(element.id(), corner);
                }
                None => {}
            }
        }

        layers::ordered_desc(&self.store)
            .into_iter()
            .find(|&id| self.store.find(id).is_some_and(|e| e.contains(point)))
            .map_or(GestureTarget::Background, GestureTarget::Body)
    }

    /// Press at `client`. With no explicit target the press is hit-tested.
    /// Returns the target that was resolved.
    pub fn pointer_down(&mut self, client: Point, target: Option<GestureTarget>) -> GestureTarget {
        let target = target.unwrap_or_else(|| self.hit_test(client));
        let Some(id) = target.element() else {
            self.press_background();
            return target;
        };
        if !self.store.contains(id) {
            log::warn!("Press on unknown element {}", id);
            return target;
        }

        // Pressing the text being edited places the caret; nothing moves.
        if matches!(target, GestureTarget::Body(_)) && self.editing_text == Some(id) {
            return target;
        }

        self.select(id);

        let point = self.frame.to_local(client);
        if let Some(element) = self.store.find(id) {
            self.manipulator.begin(element, target, point);
        }
        target
    }

    /// Pointer moved. Returns true if an element changed.
    pub fn pointer_move(&mut self, client: Point) -> bool {
        let point = self.frame.to_local(client);
        match self.manipulator.update(&mut self.store, point, self.frame.size) {
            Some(id) => {
                self.properties_dirty = true;
                self.emit(EditorEvent::GeometryChanged(id));
                true
            }
            None => false,
        }
    }

    /// Pointer released. Returns true if a gesture was active.
    pub fn pointer_up(&mut self) -> bool {
        if self.manipulator.end().is_some() {
            self.request_save();
            true
        } else {
            false
        }
    }

    // --- Keyboard ---

    /// Handle a key press. Returns true if the key did something.
    ///
    /// All keys except Escape are ignored while text is being edited.
    pub fn handle_key(&mut self, key: &Key, shift: bool) -> bool {
        if self.editing_text.is_some() {
            if *key == Key::Escape {
                self.end_text_edit();
                return true;
            }
            return false;
        }

        match key {
            Key::Character('r' | 'R') => {
                self.add_element(ElementKind::Rectangle);
                true
            }
            Key::Character('t' | 'T') => {
                self.add_element(ElementKind::Text);
                true
            }
            Key::Escape => {
                let had_selection = self.selected().is_some();
                self.clear_selection();
                had_selection
            }
            k if k.is_delete() => self.delete_selected(),
            k => match k.nudge_delta(shift) {
                Some(delta) => self.nudge_selected(delta),
                None => false,
            },
        }
    }

    fn nudge_selected(&mut self, delta: kurbo::Vec2) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        let canvas = self.frame.size;
        let Some(element) = self.store.find_mut(id) else {
            return false;
        };
        geometry::nudge(element, delta, canvas);
        self.properties_dirty = true;
        self.emit(EditorEvent::GeometryChanged(id));
        self.request_save();
        true
    }

    // --- Text ---

    /// Enter text editing on a text element. Selects it first.
    pub fn begin_text_edit(&mut self, id: ElementId) -> bool {
        if !self.store.find(id).is_some_and(Element::is_text) {
            return false;
        }
        if !self.selection.is_selected(id) {
            self.select(id);
        }
        if self.manipulator.abandon(id) {
            self.request_save();
        }
        self.editing_text = Some(id);
        true
    }

    /// Replace the edited element's text and leave editing mode.
    pub fn commit_text(&mut self, text: &str) -> bool {
        let Some(id) = self.editing_text.take() else {
            return false;
        };
        let Some(element) = self.store.find_mut(id) else {
            return false;
        };
        element.text = text.to_string();
        self.emit(EditorEvent::ContentChanged(id));
        self.request_save();
        true
    }

    /// Leave editing mode keeping the current text.
    pub fn end_text_edit(&mut self) {
        if let Some(id) = self.editing_text {
            let text = self.store.find(id).map(|e| e.text.clone()).unwrap_or_default();
            self.commit_text(&text);
        }
    }

    // --- Properties ---

    /// Apply a raw form value to the selected element.
    /// Silently ignored with no selection or a field for the other kind.
    pub fn edit_property(&mut self, field: PropertyField, raw: &str) -> bool {
        let Some(id) = self.selected() else {
            return false;
        };
        let Some(element) = self.store.find_mut(id) else {
            return false;
        };
        if !properties::apply_property(element, field, raw) {
            return false;
        }
        let event = match field {
            PropertyField::X
            | PropertyField::Y
            | PropertyField::Width
            | PropertyField::Height
            | PropertyField::Rotation => EditorEvent::GeometryChanged(id),
            _ => EditorEvent::ContentChanged(id),
        };
        self.properties_dirty = true;
        self.emit(event);
        self.request_save();
        true
    }

    // --- Layers ---

    pub fn bring_to_front(&mut self, id: ElementId) -> bool {
        let moved = self.layers.bring_to_front(&mut self.store, id);
        if moved {
            self.emit(EditorEvent::LayersChanged);
            self.request_save();
        }
        moved
    }

    pub fn move_layer_up(&mut self, id: ElementId) -> bool {
        let moved = layers::move_up(&mut self.store, id);
        if moved {
            self.emit(EditorEvent::LayersChanged);
            self.request_save();
        }
        moved
    }

    pub fn move_layer_down(&mut self, id: ElementId) -> bool {
        let moved = layers::move_down(&mut self.store, id);
        if moved {
            self.emit(EditorEvent::LayersChanged);
            self.request_save();
        }
        moved
    }

    // --- Persistence ---

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elements: self.store.iter().cloned().collect(),
            z_index_counter: self.layers.counter(),
            elem_id_counter: self.store.last_id(),
        }
    }

    /// Replace everything with a saved snapshot. Nothing is selected after.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let count = snapshot.elements.len();
        self.store.restore(snapshot.elements, snapshot.elem_id_counter);
        self.layers = LayerOrder::with_counter(snapshot.z_index_counter);
        self.layers.repair(&mut self.store);
        self.manipulator = Manipulator::new();
        self.editing_text = None;
        self.selection.clear();
        self.properties_dirty = true;
        log::info!("Restored {} elements", count);
        self.emit(EditorEvent::SelectionChanged(None));
        self.emit(EditorEvent::LayersChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Corner;
    use kurbo::Size;

    fn editor() -> Editor {
        Editor::new(CanvasFrame::new(Point::new(100.0, 50.0), Size::new(1000.0, 800.0)))
    }

    fn place(editor: &mut Editor, id: ElementId, x: f64, y: f64, w: f64, h: f64) {
        let el = editor.store.find_mut(id).unwrap();
        el.x = x;
        el.y = y;
        el.width = w;
        el.height = h;
    }

    fn z_values(editor: &Editor) -> Vec<i64> {
        let mut z: Vec<_> = editor.store().iter().map(|e| e.z_index).collect();
        z.sort_unstable();
        z
    }

    #[test]
    fn test_add_selects_and_raises() {
        let mut ed = editor();
        let a = ed.add_element(ElementKind::Rectangle);
        let b = ed.add_element(ElementKind::Text);
        assert_eq!(ed.selected(), Some(b));
        assert_eq!(ed.layers()[0].id(), b);

        let events = ed.drain_events();
        assert!(events.contains(&EditorEvent::ElementAdded(a)));
        assert!(events.contains(&EditorEvent::SelectionChanged(Some(b))));
        assert!(events.contains(&EditorEvent::SaveRequested));
        assert!(ed.drain_events().is_empty());
    }

    #[test]
    fn test_select_missing_is_noop() {
        let mut ed = editor();
        ed.add_element(ElementKind::Rectangle);
        ed.drain_events();
        assert!(!ed.select(99));
        assert_eq!(ed.selected(), Some(1));
        assert!(ed.drain_events().is_empty());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut ed = editor();
        let id = ed.add_element(ElementKind::Rectangle);
        assert!(ed.delete_selected());
        assert_eq!(ed.selected(), None);
        assert!(ed.store().find(id).is_none());
        assert!(ed.drain_events().contains(&EditorEvent::ElementRemoved(id)));
        assert!(!ed.delete(id));
    }

    #[test]
    fn test_drag_through_client_coordinates() {
        let mut ed = editor();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 100.0, 100.0, 50.0, 50.0);

        // Canvas origin is (100, 50), so client (210, 160) is local (110, 110).
        let target = ed.pointer_down(Point::new(210.0, 160.0), None);
        assert_eq!(target, GestureTarget::Body(id));
        assert_eq!(ed.mode(), ManipulationMode::Dragging);

        assert!(ed.pointer_move(Point::new(260.0, 190.0)));
        let el = ed.store().find(id).unwrap();
        assert!((el.x - 150.0).abs() < f64::EPSILON);
        assert!((el.y - 130.0).abs() < f64::EPSILON);
        assert!(ed.take_properties_dirty());
        assert!(!ed.take_properties_dirty());

        ed.drain_events();
        assert!(ed.pointer_up());
        assert_eq!(ed.drain_events(), vec![EditorEvent::SaveRequested]);
        assert_eq!(ed.mode(), ManipulationMode::Idle);
        assert!(!ed.pointer_up());
    }

    #[test]
    fn test_background_press_mid_drag_keeps_the_move() {
        let mut ed = editor();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 100.0, 100.0, 50.0, 50.0);
        ed.pointer_down(Point::new(210.0, 160.0), None);
        ed.pointer_move(Point::new(260.0, 190.0));
        ed.drain_events();

        let target = ed.pointer_down(Point::new(1090.0, 840.0), None);
        assert_eq!(target, GestureTarget::Background);
        assert_eq!(ed.mode(), ManipulationMode::Idle);
        assert_eq!(
            ed.drain_events(),
            vec![EditorEvent::SaveRequested, EditorEvent::SelectionChanged(None)]
        );
        assert!((ed.store().find(id).unwrap().x - 150.0).abs() < f64::EPSILON);
        assert!(!ed.pointer_up());
    }

    #[test]
    fn test_text_edit_mid_drag_keeps_the_move() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Text);
        place(&mut ed, id, 100.0, 100.0, 100.0, 50.0);
        ed.pointer_down(Point::new(110.0, 110.0), None);
        ed.pointer_move(Point::new(130.0, 110.0));
        ed.drain_events();

        assert!(ed.begin_text_edit(id));
        assert_eq!(ed.mode(), ManipulationMode::Idle);
        assert_eq!(ed.drain_events(), vec![EditorEvent::SaveRequested]);
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut ed = editor();
        ed.add_element(ElementKind::Rectangle);
        let before = ed.snapshot();
        assert!(!ed.pointer_move(Point::new(700.0, 700.0)));
        assert_eq!(ed.snapshot(), before);
    }

    #[test]
    fn test_hit_test_prefers_handles_then_top_body() {
        let mut ed = editor();
        let a = ed.add_element(ElementKind::Rectangle);
        let b = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, a, 0.0, 0.0, 200.0, 200.0);
        place(&mut ed, b, 100.0, 100.0, 200.0, 200.0);
        ed.select(a);

        // Overlap: a was raised by select, so it wins.
        assert_eq!(ed.hit_test(Point::new(250.0, 200.0)), GestureTarget::Body(a));
        // Bottom-right corner of a.
        assert_eq!(
            ed.hit_test(Point::new(302.0, 252.0)),
            GestureTarget::Resize(a, Corner::BottomRight)
        );
        // Rotation handle 25px above a's top centre.
        assert_eq!(ed.hit_test(Point::new(200.0, 25.0)), GestureTarget::Rotate(a));
        // Only b down here.
        assert_eq!(ed.hit_test(Point::new(380.0, 330.0)), GestureTarget::Body(b));
        assert_eq!(ed.hit_test(Point::new(1000.0, 700.0)), GestureTarget::Background);
    }

    #[test]
    fn test_hit_test_uses_rotated_body() {
        let mut ed = editor();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 100.0, 100.0, 100.0, 100.0);
        ed.store.find_mut(id).unwrap().rotation = 45.0;
        ed.clear_selection();

        // Local (150, 95): above the unrotated box, inside the rotated one.
        assert_eq!(ed.hit_test(Point::new(250.0, 145.0)), GestureTarget::Body(id));
        // Local (102, 102): unrotated corner, cut off by the rotation.
        assert_eq!(ed.hit_test(Point::new(202.0, 152.0)), GestureTarget::Background);
    }

    #[test]
    fn test_resize_via_explicit_handle() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 50.0, 50.0, 100.0, 100.0);

        ed.pointer_down(Point::new(50.0, 50.0), Some(GestureTarget::Resize(id, Corner::TopLeft)));
        ed.pointer_move(Point::new(60.0, 55.0));
        ed.pointer_up();

        let el = ed.store().find(id).unwrap();
        assert_eq!(el.bounds(), kurbo::Rect::new(60.0, 55.0, 150.0, 150.0));
    }

    #[test]
    fn test_background_press_clears_selection() {
        let mut ed = editor();
        ed.add_element(ElementKind::Rectangle);
        ed.drain_events();
        let target = ed.pointer_down(Point::new(1090.0, 840.0), None);
        assert_eq!(target, GestureTarget::Background);
        assert_eq!(ed.selected(), None);
        assert_eq!(ed.drain_events(), vec![EditorEvent::SelectionChanged(None)]);
    }

    #[test]
    fn test_keys() {
        let mut ed = Editor::default();
        assert!(ed.handle_key(&Key::Character('R'), false));
        assert!(ed.handle_key(&Key::Character('t'), false));
        assert_eq!(ed.store().len(), 2);

        let id = ed.selected().unwrap();
        let x = ed.store().find(id).unwrap().x;
        assert!(ed.handle_key(&Key::ArrowRight, true));
        assert!((ed.store().find(id).unwrap().x - (x + 10.0)).abs() < f64::EPSILON);

        assert!(ed.handle_key(&Key::Backspace, false));
        assert_eq!(ed.store().len(), 1);
        assert!(!ed.handle_key(&Key::ArrowLeft, false));
        assert!(!ed.handle_key(&Key::Other("F1".into()), false));
    }

    #[test]
    fn test_nudge_clamps_at_edge() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 2.0, 2.0, 50.0, 50.0);
        ed.handle_key(&Key::ArrowUp, false);
        ed.handle_key(&Key::ArrowLeft, false);
        let el = ed.store().find(id).unwrap();
        assert!(el.x.abs() < f64::EPSILON);
        assert!(el.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_editing_blocks_keys_and_drag() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Text);
        assert!(ed.begin_text_edit(id));

        assert!(!ed.handle_key(&Key::Character('r'), false));
        assert!(!ed.handle_key(&Key::Delete, false));
        assert_eq!(ed.store().len(), 1);

        let center = ed.store().find(id).unwrap().center();
        ed.pointer_down(center, None);
        assert_eq!(ed.mode(), ManipulationMode::Idle);

        assert!(ed.commit_text("Hello"));
        assert_eq!(ed.store().find(id).unwrap().text, "Hello");
        assert_eq!(ed.editing_text(), None);
        assert!(ed.handle_key(&Key::Character('r'), false));
    }

    #[test]
    fn test_press_on_edited_text_does_not_raise() {
        let mut ed = Editor::default();
        let text = ed.add_element(ElementKind::Text);
        let rect = ed.add_element(ElementKind::Rectangle);
        assert!(ed.begin_text_edit(text));
        ed.bring_to_front(rect);
        let z = ed.store().find(text).unwrap().z_index;
        ed.drain_events();

        let center = ed.store().find(text).unwrap().center();
        let target = ed.pointer_down(center, Some(GestureTarget::Body(text)));
        assert_eq!(target, GestureTarget::Body(text));
        assert_eq!(ed.store().find(text).unwrap().z_index, z);
        assert!(ed.store().find(rect).unwrap().z_index > z);
        assert!(ed.drain_events().is_empty());
        assert_eq!(ed.editing_text(), Some(text));
        assert_eq!(ed.mode(), ManipulationMode::Idle);
    }

    #[test]
    fn test_text_edit_rejects_rectangles() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Rectangle);
        assert!(!ed.begin_text_edit(id));
        assert!(!ed.commit_text("nope"));
    }

    #[test]
    fn test_escape_ends_text_edit() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Text);
        ed.begin_text_edit(id);
        assert!(ed.handle_key(&Key::Escape, false));
        assert_eq!(ed.editing_text(), None);
        assert_eq!(ed.store().find(id).unwrap().text, "Text");
        assert_eq!(ed.selected(), Some(id));
    }

    #[test]
    fn test_edit_property_on_selection() {
        let mut ed = Editor::default();
        assert!(!ed.edit_property(PropertyField::Width, "300"));

        let id = ed.add_element(ElementKind::Rectangle);
        ed.drain_events();
        assert!(ed.edit_property(PropertyField::Width, "300"));
        assert!((ed.store().find(id).unwrap().width - 300.0).abs() < f64::EPSILON);
        assert_eq!(
            ed.drain_events(),
            vec![EditorEvent::GeometryChanged(id), EditorEvent::SaveRequested]
        );
        assert!(!ed.edit_property(PropertyField::FontSize, "20"));
    }

    #[test]
    fn test_layer_moves_keep_keys_unique() {
        let mut ed = Editor::default();
        let rect = ed.add_element(ElementKind::Rectangle);
        let text = ed.add_element(ElementKind::Text);
        ed.select(rect);
        assert!(ed.move_layer_down(rect));
        let order: Vec<_> = ed.layers().iter().map(|e| e.id()).collect();
        assert_eq!(order, vec![text, rect]);

        assert!(ed.move_layer_up(rect));
        assert!(!ed.move_layer_up(rect));
        let z = z_values(&ed);
        let mut dedup = z.clone();
        dedup.dedup();
        assert_eq!(z, dedup);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut ed = Editor::default();
        ed.add_element(ElementKind::Rectangle);
        let text = ed.add_element(ElementKind::Text);
        ed.begin_text_edit(text);
        ed.commit_text("saved");
        let snap = ed.snapshot();

        let mut other = Editor::default();
        other.restore(snap.clone());
        assert_eq!(other.selected(), None);
        assert_eq!(other.snapshot(), snap);
        assert_eq!(other.store().find(text).unwrap().text, "saved");

        // Counters carry over.
        let next = other.add_element(ElementKind::Rectangle);
        assert_eq!(next, 3);
        assert!(other.store().find(next).unwrap().z_index >= snap.z_index_counter);
    }

    #[test]
    fn test_rotation_scenario() {
        let mut ed = Editor::default();
        let id = ed.add_element(ElementKind::Rectangle);
        place(&mut ed, id, 50.0, 50.0, 100.0, 100.0);
        ed.pointer_down(Point::new(150.0, 100.0), Some(GestureTarget::Rotate(id)));
        assert_eq!(ed.mode(), ManipulationMode::Rotating);
        ed.pointer_move(Point::new(100.0, 150.0));
        assert!((ed.store().find(id).unwrap().rotation - 90.0).abs() < 1e-9);
    }
}
