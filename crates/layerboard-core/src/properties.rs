//! Property form edits.
//!
//! Form fields arrive as raw strings. Numeric fields are read the way a
//! browser's `parseInt` reads them and fall back to a default when nothing
//! usable (or zero) comes out.

use crate::element::{Element, ElementKind, ElementStyles, MIN_HEIGHT, MIN_WIDTH};
use std::fmt;
use std::str::FromStr;

/// An editable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    X,
    Y,
    Width,
    Height,
    Rotation,
    BackgroundColor,
    BorderRadius,
    FontSize,
    TextColor,
}

impl PropertyField {
    pub const ALL: [PropertyField; 9] = [
        PropertyField::X,
        PropertyField::Y,
        PropertyField::Width,
        PropertyField::Height,
        PropertyField::Rotation,
        PropertyField::BackgroundColor,
        PropertyField::BorderRadius,
        PropertyField::FontSize,
        PropertyField::TextColor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PropertyField::X => "x",
            PropertyField::Y => "y",
            PropertyField::Width => "width",
            PropertyField::Height => "height",
            PropertyField::Rotation => "rotation",
            PropertyField::BackgroundColor => "background",
            PropertyField::BorderRadius => "radius",
            PropertyField::FontSize => "font-size",
            PropertyField::TextColor => "color",
        }
    }

    /// The kind this field is limited to, if any.
    pub fn only_for(&self) -> Option<ElementKind> {
        match self {
            PropertyField::BackgroundColor | PropertyField::BorderRadius => {
                Some(ElementKind::Rectangle)
            }
            PropertyField::FontSize | PropertyField::TextColor => Some(ElementKind::Text),
            _ => None,
        }
    }

    pub fn applies_to(&self, kind: ElementKind) -> bool {
        self.only_for().is_none_or(|only| only == kind)
    }
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let field = match normalized.as_str() {
            "x" => PropertyField::X,
            "y" => PropertyField::Y,
            "width" | "w" => PropertyField::Width,
            "height" | "h" => PropertyField::Height,
            "rotation" | "rotate" => PropertyField::Rotation,
            "background" | "backgroundcolor" | "bg" | "fill" => PropertyField::BackgroundColor,
            "radius" | "borderradius" => PropertyField::BorderRadius,
            "fontsize" | "size" => PropertyField::FontSize,
            "color" | "textcolor" => PropertyField::TextColor,
            _ => return Err(format!("unknown property '{}'", s)),
        };
        Ok(field)
    }
}

/// Read a leading integer the way `parseInt(s)` does.
///
/// Leading whitespace and one sign are skipped, a `0x` prefix switches to
/// hexadecimal, and parsing stops at the first non-digit. Returns `None`
/// when no digit was read.
pub fn parse_int(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(d);
        seen = true;
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// `parseInt(raw) || fallback`: zero and garbage both take the fallback.
pub fn int_or(raw: &str, fallback: f64) -> f64 {
    parse_int(raw).filter(|v| *v != 0.0).unwrap_or(fallback)
}

/// Apply a raw form value to an element.
///
/// Returns false when the field does not apply to the element's kind; the
/// element is then left untouched.
pub fn apply_property(element: &mut Element, field: PropertyField, raw: &str) -> bool {
    if !field.applies_to(element.kind()) {
        return false;
    }
    match field {
        PropertyField::X => element.x = int_or(raw, 0.0),
        PropertyField::Y => element.y = int_or(raw, 0.0),
        PropertyField::Width => element.width = int_or(raw, MIN_WIDTH).max(MIN_WIDTH),
        PropertyField::Height => element.height = int_or(raw, MIN_HEIGHT).max(MIN_HEIGHT),
        PropertyField::Rotation => element.rotation = int_or(raw, 0.0),
        PropertyField::BackgroundColor => element.styles.background_color = raw.to_string(),
        PropertyField::BorderRadius => element.styles.border_radius = int_or(raw, 0.0),
        PropertyField::FontSize => {
            element.styles.font_size = int_or(raw, ElementStyles::DEFAULT_FONT_SIZE)
                .max(ElementStyles::MIN_FONT_SIZE)
        }
        PropertyField::TextColor => element.styles.color = raw.to_string(),
    }
    true
}

/// Current value of a field as the form would display it.
pub fn property_value(element: &Element, field: PropertyField) -> String {
    match field {
        PropertyField::X => format!("{}", element.x.round()),
        PropertyField::Y => format!("{}", element.y.round()),
        PropertyField::Width => format!("{}", element.width.round()),
        PropertyField::Height => format!("{}", element.height.round()),
        PropertyField::Rotation => format!("{}", element.rotation.round()),
        PropertyField::BackgroundColor => element.styles.background_color.clone(),
        PropertyField::BorderRadius => format!("{}", element.styles.border_radius),
        PropertyField::FontSize => format!("{}", element.styles.font_size),
        PropertyField::TextColor => element.styles.color.clone(),
    }
}
