//! Application configuration.

use kurbo::{Point, Size};
use layerboard_core::CanvasFrame;
use layerboard_core::storage::{DEFAULT_AUTOSAVE_INTERVAL_SECS, LAST_LAYOUT_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "LAYERBOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Application configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Canvas top-left in client coordinates.
    pub canvas_origin: Point,
    pub canvas_size: Size,
    /// Where layouts are stored. `None` uses the platform data directory.
    pub storage_dir: Option<PathBuf>,
    pub autosave_key: String,
    pub autosave_interval_secs: u64,
    /// Command script to run. `None` reads standard input.
    pub script: Option<PathBuf>,
    /// Restore the saved layout on start.
    pub restore_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let frame = CanvasFrame::default();
        Self {
            canvas_origin: frame.origin,
            canvas_size: frame.size,
            storage_dir: None,
            autosave_key: LAST_LAYOUT_KEY.to_string(),
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
            script: None,
            restore_on_start: true,
        }
    }
}

impl AppConfig {
    /// Load from the file named by `LAYERBOARD_CONFIG`, or defaults when unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn frame(&self) -> CanvasFrame {
        CanvasFrame::new(self.canvas_origin, self.canvas_size)
    }
}
