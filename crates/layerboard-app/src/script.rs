//! Line-based command scripts.
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//! Coordinates are client coordinates, as a pointer would report them.

use kurbo::Point;
use layerboard_core::{Corner, ElementId, ElementKind, GestureTarget, Key, PropertyField};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerMove {
    Up,
    Down,
    Front,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(ElementKind),
    /// Press at a client point; `None` hit-tests.
    Down(Point, Option<GestureTarget>),
    Move(Point),
    Up,
    Key { key: Key, shift: bool },
    Select(ElementId),
    Clear,
    Delete(Option<ElementId>),
    Layer(LayerMove, ElementId),
    Set(PropertyField, String),
    Edit(ElementId),
    Text(String),
    List,
    Props,
    Export(ExportFormat, PathBuf),
    Save,
    Help,
}

impl Command {
    /// Parse one script line. `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "add" => match args.as_slice() {
                ["rect" | "rectangle"] => Command::Add(ElementKind::Rectangle),
                ["text"] => Command::Add(ElementKind::Text),
                _ => return Err(usage("add", "rect|text")),
            },
            "down" => {
                const EXPECTED: &str =
                    "<x> <y> [body <id>|handle <id> <nw|ne|sw|se>|rotate <id>|background]";
                let [x, y, target @ ..] = args.as_slice() else {
                    return Err(usage("down", EXPECTED));
                };
                let point = Point::new(number(x)?, number(y)?);
                let target = match target {
                    [] => None,
                    ["background"] => Some(GestureTarget::Background),
                    ["body", id] => Some(GestureTarget::Body(element_id(id)?)),
                    ["rotate", id] => Some(GestureTarget::Rotate(element_id(id)?)),
                    ["handle", id, corner] => {
                        let corner: Corner = corner.parse().map_err(CommandError::Invalid)?;
                        Some(GestureTarget::Resize(element_id(id)?, corner))
                    }
                    _ => return Err(usage("down", EXPECTED)),
                };
                Command::Down(point, target)
            }
            "move" => match args.as_slice() {
                [x, y] => Command::Move(Point::new(number(x)?, number(y)?)),
                _ => return Err(usage("move", "<x> <y>")),
            },
            "up" => Command::Up,
            "key" => match args.as_slice() {
                [name] => Command::Key {
                    key: parse_key(name),
                    shift: false,
                },
                [name, "shift"] => Command::Key {
                    key: parse_key(name),
                    shift: true,
                },
                _ => return Err(usage("key", "<name> [shift]")),
            },
            "select" => match args.as_slice() {
                [id] => Command::Select(element_id(id)?),
                _ => return Err(usage("select", "<id>")),
            },
            "clear" => Command::Clear,
            "delete" => match args.as_slice() {
                [] => Command::Delete(None),
                [id] => Command::Delete(Some(element_id(id)?)),
                _ => return Err(usage("delete", "[id]")),
            },
            "layer" => {
                const EXPECTED: &str = "up|down|front <id>";
                let [direction, id] = args.as_slice() else {
                    return Err(usage("layer", EXPECTED));
                };
                let direction = match *direction {
                    "up" => LayerMove::Up,
                    "down" => LayerMove::Down,
                    "front" => LayerMove::Front,
                    _ => return Err(usage("layer", EXPECTED)),
                };
                Command::Layer(direction, element_id(id)?)
            }
            "set" => {
                let Some((field, value)) = rest.split_once(char::is_whitespace) else {
                    return Err(usage("set", "<field> <value>"));
                };
                let field: PropertyField = field.parse().map_err(CommandError::Invalid)?;
                Command::Set(field, value.trim().to_string())
            }
            "edit" => match args.as_slice() {
                [id] => Command::Edit(element_id(id)?),
                _ => return Err(usage("edit", "<id>")),
            },
            "text" => Command::Text(rest.to_string()),
            "list" => Command::List,
            "props" => Command::Props,
            "export" => {
                const EXPECTED: &str = "json|html <path>";
                let Some((format, path)) = rest.split_once(char::is_whitespace) else {
                    return Err(usage("export", EXPECTED));
                };
                let format = match format {
                    "json" => ExportFormat::Json,
                    "html" => ExportFormat::Html,
                    _ => return Err(usage("export", EXPECTED)),
                };
                Command::Export(format, PathBuf::from(path.trim()))
            }
            "save" => Command::Save,
            "help" => Command::Help,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn usage(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::Usage { command, expected }
}

fn number(s: &str) -> Result<f64, CommandError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::Number(s.to_string()))
}

fn element_id(s: &str) -> Result<ElementId, CommandError> {
    s.parse().map_err(|_| CommandError::Number(s.to_string()))
}

fn parse_key(name: &str) -> Key {
    match name.parse() {
        Ok(key) => key,
        Err(never) => match never {},
    }
}
