//! Element records placed on the canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Unique identifier for elements.
///
/// Ids start at 1 and are never reused, even after deletion.
pub type ElementId = u64;

/// Minimum element width in canvas pixels.
pub const MIN_WIDTH: f64 = 30.0;
/// Minimum element height in canvas pixels.
pub const MIN_HEIGHT: f64 = 20.0;

/// Kind of element. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Text,
}

impl ElementKind {
    /// Name used in the layers list and in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Text => "text",
        }
    }

    /// Default size for a freshly created element of this kind.
    pub fn default_size(&self) -> Size {
        match self {
            ElementKind::Rectangle => Size::new(150.0, 150.0),
            ElementKind::Text => Size::new(150.0, 50.0),
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual attributes.
///
/// Every element carries all of them; rectangles read the background colour
/// and corner radius, text reads the font size and text colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyles {
    /// Fill colour as a CSS colour string.
    pub background_color: String,
    /// Text colour as a CSS colour string.
    pub color: String,
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

impl ElementStyles {
    /// Default font size for new elements.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    /// Smallest font size the property form accepts.
    pub const MIN_FONT_SIZE: f64 = 8.0;

    /// Styles for a freshly created element.
    pub fn for_kind(kind: ElementKind) -> Self {
        let background_color = match kind {
            ElementKind::Rectangle => "gray",
            ElementKind::Text => "transparent",
        };
        Self {
            background_color: background_color.to_string(),
            color: "black".to_string(),
            border_radius: 0.0,
            font_size: Self::DEFAULT_FONT_SIZE,
        }
    }
}

/// A placed rectangle or text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub(crate) id: ElementId,
    #[serde(rename = "type")]
    pub(crate) kind: ElementKind,
    /// Left edge in canvas-local coordinates.
    pub x: f64,
    /// Top edge in canvas-local coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub styles: ElementStyles,
    /// Text content (empty for rectangles).
    #[serde(default)]
    pub text: String,
    /// Rotation in degrees around the centre. Never normalised.
    #[serde(default)]
    pub rotation: f64,
    /// Stacking key, unique across the store.
    pub z_index: i64,
}

impl Element {
    /// Horizontal and vertical stagger between successive new elements.
    pub const CASCADE_OFFSET: f64 = 20.0;
    /// Where the first element lands.
    pub const CASCADE_ORIGIN: Point = Point::new(400.0, 200.0);

    /// Create an element with the defaults for its kind.
    ///
    /// `index` is the number of elements already on the canvas and drives the
    /// cascading placement.
    pub fn new(id: ElementId, kind: ElementKind, index: usize, z_index: i64) -> Self {
        let offset = index as f64 * Self::CASCADE_OFFSET;
        let size = kind.default_size();
        let text = match kind {
            ElementKind::Rectangle => String::new(),
            ElementKind::Text => "Text".to_string(),
        };
        Self {
            id,
            kind,
            x: Self::CASCADE_ORIGIN.x + offset,
            y: Self::CASCADE_ORIGIN.y + offset,
            width: size.width,
            height: size.height,
            styles: ElementStyles::for_kind(kind),
            text,
            rotation: 0.0,
            z_index,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Axis-aligned bounds, ignoring rotation.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Centre of the bounds. Rotation happens around this point, so it is
    /// also the centre of the rotated box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Whether `point` falls inside the element as drawn, rotation included.
    pub fn contains(&self, point: Point) -> bool {
        let center = self.center();
        let (sin_r, cos_r) = (-self.rotation).to_radians().sin_cos();
        let d = point - center;
        let local = Point::new(
            center.x + d.x * cos_r - d.y * sin_r,
            center.y + d.x * sin_r + d.y * cos_r,
        );
        self.bounds().contains(local)
    }

    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }
}
