//! Layerboard Application
//!
//! Headless application shell: configuration, command scripts as the event
//! source, and persistence around the core editor.

mod app;
mod config;
mod error;
mod script;
mod shortcuts;

pub use app::{App, RunSummary};
pub use config::{AppConfig, ConfigError, CONFIG_ENV};
pub use error::{AppError, AppResult};
pub use script::{Command, CommandError, ExportFormat, LayerMove};
pub use shortcuts::{Shortcut, ShortcutRegistry};
