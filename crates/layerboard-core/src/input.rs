//! Keyboard input.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Nudge distance for arrow keys.
pub const NUDGE_STEP: f64 = 5.0;
/// Nudge distance for arrow keys with Shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Keys the editor reacts to. Anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Character(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Escape,
    Other(String),
}

impl Key {
    /// Direction for arrow keys, scaled by the nudge step.
    pub fn nudge_delta(&self, shift: bool) -> Option<Vec2> {
        let step = if shift { NUDGE_STEP_LARGE } else { NUDGE_STEP };
        match self {
            Key::ArrowUp => Some(Vec2::new(0.0, -step)),
            Key::ArrowDown => Some(Vec2::new(0.0, step)),
            Key::ArrowLeft => Some(Vec2::new(-step, 0.0)),
            Key::ArrowRight => Some(Vec2::new(step, 0.0)),
            _ => None,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Key::Delete | Key::Backspace)
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    /// Accepts DOM key names (`ArrowLeft`, `Delete`) and short aliases
    /// (`left`, `del`). A single character is a character key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Key::Character(c));
        }
        let key = match s.to_ascii_lowercase().as_str() {
            "arrowup" | "up" => Key::ArrowUp,
            "arrowdown" | "down" => Key::ArrowDown,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            "delete" | "del" => Key::Delete,
            "backspace" => Key::Backspace,
            "escape" | "esc" => Key::Escape,
            _ => Key::Other(s.to_string()),
        };
        Ok(key)
    }
}
