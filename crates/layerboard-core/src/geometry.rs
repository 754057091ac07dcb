//! Drag, resize and rotate math.
//!
//! Each gesture captures a snapshot when it starts. Moves are computed from
//! that snapshot and the current pointer only, so replaying the same pointer
//! position always produces the same geometry.
//!
//! All points are canvas-local: client coordinates minus the canvas origin
//! (see [`CanvasFrame::to_local`]).

use crate::element::{Element, MIN_HEIGHT, MIN_WIDTH};
use crate::selection::Corner;
use kurbo::{Point, Rect, Size, Vec2};

/// Where the canvas sits on screen and how big it currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    /// Top-left corner in client coordinates.
    pub origin: Point,
    /// Rendered size.
    pub size: Size,
}

impl CanvasFrame {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Convert a client point into canvas-local coordinates.
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.origin.x, client.y - self.origin.y)
    }
}

impl Default for CanvasFrame {
    fn default() -> Self {
        Self::new(Point::ZERO, Size::new(1200.0, 800.0))
    }
}

/// Clamp a top-left position so a box of `size` stays inside `canvas`.
///
/// When the box is larger than the canvas the lower bound wins and the
/// position is pinned to 0.
pub fn clamp_position(position: Point, size: Size, canvas: Size) -> Point {
    Point::new(
        position.x.min(canvas.width - size.width).max(0.0),
        position.y.min(canvas.height - size.height).max(0.0),
    )
}

/// Shift an element by `delta`, keeping it inside the canvas.
pub fn nudge(element: &mut Element, delta: Vec2, canvas: Size) {
    let target = element.position() + delta;
    let clamped = clamp_position(target, element.size(), canvas);
    element.x = clamped.x;
    element.y = clamped.y;
}

/// Snapshot for moving an element with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSnapshot {
    /// Pointer position relative to the element's top-left corner.
    pub offset: Vec2,
}

impl DragSnapshot {
    pub fn begin(element: &Element, pointer: Point) -> Self {
        Self {
            offset: pointer - element.position(),
        }
    }

    /// Move the element so the grab point follows the pointer.
    pub fn apply(&self, element: &mut Element, pointer: Point, canvas: Size) {
        let target = pointer - self.offset;
        let clamped = clamp_position(target, element.size(), canvas);
        element.x = clamped.x;
        element.y = clamped.y;
    }
}

/// Snapshot for resizing from one of the four corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSnapshot {
    /// The corner being dragged. The opposite corner is the anchor.
    pub corner: Corner,
    /// Pointer position at gesture start.
    pub pointer_start: Point,
    /// Element bounds at gesture start.
    pub start: Rect,
}

impl ResizeSnapshot {
    pub fn begin(element: &Element, corner: Corner, pointer: Point) -> Self {
        Self {
            corner,
            pointer_start: pointer,
            start: element.bounds(),
        }
    }

    /// Resize the element for the current pointer position.
    ///
    /// A moving left or top edge that would cross 0 is pinned there and the
    /// dimension becomes the distance from 0 to the fixed opposite edge.
    /// A moving right or bottom edge is capped at the canvas edge. Minimum
    /// sizes are applied last.
    pub fn apply(&self, element: &mut Element, pointer: Point, canvas: Size) {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        let (x0, y0) = (self.start.x0, self.start.y0);
        let (w0, h0) = (self.start.width(), self.start.height());

        let (mut x, mut y) = (x0, y0);
        let mut width: f64;
        let mut height: f64;

        match self.corner {
            Corner::BottomRight => {
                width = (w0 + dx).min(canvas.width - x);
                height = (h0 + dy).min(canvas.height - y);
            }
            Corner::BottomLeft => {
                width = w0 - dx;
                x = x0 + dx;
                if x < 0.0 {
                    width = w0 + x0;
                    x = 0.0;
                }
                height = (h0 + dy).min(canvas.height - y);
            }
            Corner::TopRight => {
                width = (w0 + dx).min(canvas.width - x);
                height = h0 - dy;
                y = y0 + dy;
                if y < 0.0 {
                    height = h0 + y0;
                    y = 0.0;
                }
            }
            Corner::TopLeft => {
                width = w0 - dx;
                height = h0 - dy;
                x = x0 + dx;
                y = y0 + dy;
                if x < 0.0 {
                    width = w0 + x0;
                    x = 0.0;
                }
                if y < 0.0 {
                    height = h0 + y0;
                    y = 0.0;
                }
            }
        }

        element.x = x;
        element.y = y;
        element.width = width.max(MIN_WIDTH);
        element.height = height.max(MIN_HEIGHT);
    }
}

/// Snapshot for rotating around the element centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSnapshot {
    /// Centre of the element at gesture start.
    pub pivot: Point,
    /// Angle of the pointer around the pivot at gesture start, in radians.
    pub start_angle: f64,
    /// Element rotation at gesture start, in degrees.
    pub start_rotation: f64,
}

impl RotateSnapshot {
    pub fn begin(element: &Element, pointer: Point) -> Self {
        let pivot = element.center();
        Self {
            pivot,
            start_angle: angle_around(pivot, pointer),
            start_rotation: element.rotation,
        }
    }

    /// Rotate by however far the pointer has swept around the pivot.
    /// The result is not wrapped into 0..360.
    pub fn apply(&self, element: &mut Element, pointer: Point) {
        let delta = angle_around(self.pivot, pointer) - self.start_angle;
        element.rotation = self.start_rotation + delta.to_degrees();
    }
}

fn angle_around(pivot: Point, point: Point) -> f64 {
    (point.y - pivot.y).atan2(point.x - pivot.x)
}
