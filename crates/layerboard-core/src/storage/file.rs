//! File-based storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary file that
//! is then renamed over the old one, so a crash mid-save leaves the previous
//! layout readable.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::snapshot::Snapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores snapshots as JSON files in one directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `base_path`, creating the directory if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::Io(format!("Failed to create {}: {}", base_path.display(), e))
        })?;
        Ok(Self { base_path })
    }

    /// Storage in the platform data directory.
    ///
    /// On Linux: `~/.local/share/layerboard/layouts/`
    /// On Windows: `%LOCALAPPDATA%\layerboard\layouts\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("layerboard").join("layouts"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file for `key`. Keys are plain file stems: ASCII
    /// alphanumerics, `-` and `_`.
    fn layout_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io(format!("Failed to {} {}: {}", action, path.display(), e))
}

impl Storage for FileStorage {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.layout_path(key);
        let json = snapshot.to_json();

        Box::pin(async move {
            let path = path?;
            let json = json.map_err(|e| StorageError::Serialization(e.to_string()))?;
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, json).map_err(|e| io_error("write", &tmp, e))?;
            fs::rename(&tmp, &path).map_err(|e| io_error("replace", &path, e))
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>> {
        let path = self.layout_path(key);
        let key = key.to_string();

        Box::pin(async move {
            let path = path?;
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(StorageError::NotFound(key));
                }
                Err(e) => return Err(io_error("read", &path, e)),
            };

            Snapshot::from_json(&json).map_err(|e| {
                StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
            })
        })
    }
}
