//! Keyboard shortcut registry and documentation.

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, shift: bool, description: &'static str) -> Self {
        Self {
            key,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Shift+ArrowLeft").
    pub fn format(&self) -> String {
        if self.shift {
            format!("Shift+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("R", false, "Add rectangle"),
            Shortcut::new("T", false, "Add text"),
            Shortcut::new("Arrows", false, "Nudge selection by 5px"),
            Shortcut::new("Arrows", true, "Nudge selection by 10px"),
            Shortcut::new("Delete", false, "Delete selected element"),
            Shortcut::new("Backspace", false, "Delete selected element"),
            Shortcut::new("Escape", false, "Finish text editing or clear selection"),
        ]
    }

    /// Help text listing every shortcut.
    pub fn help_text() -> String {
        let mut out = String::from("Keyboard shortcuts:\n");
        for shortcut in Self::all() {
            out.push_str(&format!("  {:20} {}\n", shortcut.format(), shortcut.description));
        }
        out
    }
}
