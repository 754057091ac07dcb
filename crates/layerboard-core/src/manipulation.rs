//! Gesture state machine.
//!
//! At most one gesture runs at a time. `begin` captures a snapshot of the
//! target element, `update` re-derives the element geometry from that
//! snapshot and the current pointer, and `end` drops back to idle.

use crate::element::{Element, ElementId};
use crate::geometry::{DragSnapshot, ResizeSnapshot, RotateSnapshot};
use crate::selection::GestureTarget;
use crate::store::ElementStore;
use kurbo::{Point, Size};

/// Observable mode of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManipulationMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
    Rotating,
}

/// Gesture snapshot, one variant per active mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Drag(DragSnapshot),
    Resize(ResizeSnapshot),
    Rotate(RotateSnapshot),
}

impl Gesture {
    pub fn mode(&self) -> ManipulationMode {
        match self {
            Gesture::Drag(_) => ManipulationMode::Dragging,
            Gesture::Resize(_) => ManipulationMode::Resizing,
            Gesture::Rotate(_) => ManipulationMode::Rotating,
        }
    }
}

/// State of an in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulationState {
    /// The element being manipulated.
    pub element_id: ElementId,
    /// Snapshot taken at pointer-down.
    pub gesture: Gesture,
    /// Last pointer position seen, canvas-local.
    pub current_point: Point,
}

/// Idle / Dragging / Resizing / Rotating.
#[derive(Debug, Clone, Default)]
pub struct Manipulator {
    active: Option<ManipulationState>,
}

impl Manipulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ManipulationMode {
        self.active
            .as_ref()
            .map_or(ManipulationMode::Idle, |state| state.gesture.mode())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ManipulationState> {
        self.active.as_ref()
    }

    /// Start a gesture on `element`. A gesture already in progress is
    /// replaced. Returns false (and stays as it was) for a background target
    /// or a target naming another element.
    pub fn begin(&mut self, element: &Element, target: GestureTarget, pointer: Point) -> bool {
        if target.element() != Some(element.id()) {
            return false;
        }
        let gesture = match target {
            GestureTarget::Body(_) => Gesture::Drag(DragSnapshot::begin(element, pointer)),
            GestureTarget::Resize(_, corner) => {
                Gesture::Resize(ResizeSnapshot::begin(element, corner, pointer))
            }
            GestureTarget::Rotate(_) => Gesture::Rotate(RotateSnapshot::begin(element, pointer)),
            GestureTarget::Background => return false,
        };
        if let Some(previous) = self.active {
            log::debug!(
                "Replacing {:?} on element {} with a new gesture",
                previous.gesture.mode(),
                previous.element_id
            );
        }
        log::debug!("Begin {:?} on element {}", gesture.mode(), element.id());
        self.active = Some(ManipulationState {
            element_id: element.id(),
            gesture,
            current_point: pointer,
        });
        true
    }

    /// Apply a pointer move. Returns the id of the element that changed, or
    /// `None` when idle or when the element has gone away.
    pub fn update(
        &mut self,
        store: &mut ElementStore,
        pointer: Point,
        canvas: Size,
    ) -> Option<ElementId> {
        let state = self.active.as_mut()?;
        state.current_point = pointer;
        let element = store.find_mut(state.element_id)?;
        match &state.gesture {
            Gesture::Drag(drag) => drag.apply(element, pointer, canvas),
            Gesture::Resize(resize) => resize.apply(element, pointer, canvas),
            Gesture::Rotate(rotate) => rotate.apply(element, pointer),
        }
        Some(state.element_id)
    }

    /// Finish the gesture. Returns the state that was active, if any.
    pub fn end(&mut self) -> Option<ManipulationState> {
        let finished = self.active.take();
        if let Some(state) = &finished {
            log::debug!("End {:?} on element {}", state.gesture.mode(), state.element_id);
        }
        finished
    }

    /// Drop the gesture if it targets `id`. Returns true if one was dropped.
    pub fn abandon(&mut self, id: ElementId) -> bool {
        if self.active.is_some_and(|state| state.element_id == id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
