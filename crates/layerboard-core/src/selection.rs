//! Selection tracking and manipulation handles.

use crate::element::{Element, ElementId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Handle hit radius in canvas pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 8.0;
/// Distance from the top edge to the rotation handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 25.0;

/// Corner positions, used for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Compass name (`nw`, `ne`, `sw`, `se`).
    pub fn compass(&self) -> &'static str {
        match self {
            Corner::TopLeft => "nw",
            Corner::TopRight => "ne",
            Corner::BottomLeft => "sw",
            Corner::BottomRight => "se",
        }
    }
}

impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nw" => Ok(Corner::TopLeft),
            "ne" => Ok(Corner::TopRight),
            "sw" => Ok(Corner::BottomLeft),
            "se" => Ok(Corner::BottomRight),
            other => Err(format!("unknown resize handle '{}'", other)),
        }
    }
}

/// Type of selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    /// Corner handle for resizing.
    Corner(Corner),
    /// Rotation handle (above the top edge).
    Rotate,
}

/// A selection handle with its position and type.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// Position in canvas-local coordinates.
    pub position: Point,
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    /// The element itself (starts a drag).
    Body(ElementId),
    /// A resize corner of the element.
    Resize(ElementId, Corner),
    /// The rotation handle of the element.
    Rotate(ElementId),
    /// Empty canvas.
    Background,
}

impl GestureTarget {
    pub fn element(&self) -> Option<ElementId> {
        match *self {
            GestureTarget::Body(id) | GestureTarget::Resize(id, _) | GestureTarget::Rotate(id) => {
                Some(id)
            }
            GestureTarget::Background => None,
        }
    }
}

/// Handles for a selected element: four corners plus the rotation handle.
///
/// Handles turn with the element, so positions are rotated around its centre.
pub fn get_handles(element: &Element) -> Vec<Handle> {
    let center = element.center();
    let half_w = element.width / 2.0;
    let half_h = element.height / 2.0;
    let (sin_r, cos_r) = element.rotation.to_radians().sin_cos();

    let rotate_point = |dx: f64, dy: f64| -> Point {
        center + Vec2::new(dx * cos_r - dy * sin_r, dx * sin_r + dy * cos_r)
    };

    vec![
        Handle::new(rotate_point(-half_w, -half_h), HandleKind::Corner(Corner::TopLeft)),
        Handle::new(rotate_point(half_w, -half_h), HandleKind::Corner(Corner::TopRight)),
        Handle::new(rotate_point(-half_w, half_h), HandleKind::Corner(Corner::BottomLeft)),
        Handle::new(rotate_point(half_w, half_h), HandleKind::Corner(Corner::BottomRight)),
        Handle::new(
            rotate_point(0.0, -half_h - ROTATE_HANDLE_OFFSET),
            HandleKind::Rotate,
        ),
    ]
}

/// Find which handle (if any) is hit at the given point.
/// The rotation handle wins over corners when both are in range.
pub fn hit_test_handles(element: &Element, point: Point, tolerance: f64) -> Option<HandleKind> {
    let handles = get_handles(element);
    handles
        .iter()
        .find(|h| h.kind == HandleKind::Rotate && h.hit_test(point, tolerance))
        .or_else(|| handles.iter().find(|h| h.hit_test(point, tolerance)))
        .map(|h| h.kind)
}

/// Single-element selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, replacing any previous selection.
    /// Returns the previously selected id.
    pub fn select(&mut self, id: ElementId) -> Option<ElementId> {
        self.selected.replace(id)
    }

    /// Clear the selection. Returns the previously selected id.
    pub fn clear(&mut self) -> Option<ElementId> {
        self.selected.take()
    }

    /// Clear the selection if it points at `id`. Returns true if it did.
    pub fn forget(&mut self, id: ElementId) -> bool {
        if self.selected == Some(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }
}
