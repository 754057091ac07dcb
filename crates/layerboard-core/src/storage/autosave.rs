//! Auto-save for the canvas layout.
//!
//! The editor requests a save after every committed change; the manager
//! records that as a dirty flag and writes the snapshot when asked, either
//! immediately or once the interval has passed.

use crate::snapshot::Snapshot;
use crate::storage::{Storage, StorageError, StorageResult};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default auto-save interval in seconds. Zero saves on every request.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 0;

/// Key the layout is saved under unless configured otherwise.
pub const LAST_LAYOUT_KEY: &str = "canvasLayout";

/// Tracks unsaved changes and writes snapshots to a storage backend.
pub struct AutoSaveManager<S: Storage> {
    storage: Arc<S>,
    interval: Duration,
    last_save: Option<Instant>,
    /// Whether there are unsaved changes.
    dirty: bool,
    /// Key the layout is written under.
    key: String,
}

impl<S: Storage> AutoSaveManager<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            last_save: None,
            dirty: false,
            key: LAST_LAYOUT_KEY.to_string(),
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Dirty and the interval has elapsed since the last save.
    pub fn should_save(&self) -> bool {
        if !self.dirty {
            return false;
        }
        match self.last_save {
            Some(last) => last.elapsed() >= self.interval,
            None => true,
        }
    }

    /// Save now. The dirty flag survives a failed write.
    pub async fn save(&mut self, snapshot: &Snapshot) -> StorageResult<()> {
        self.storage.save(&self.key, snapshot).await?;
        self.last_save = Some(Instant::now());
        self.dirty = false;
        log::debug!("Saved {} elements under '{}'", snapshot.elements.len(), self.key);
        Ok(())
    }

    /// Load the saved layout. `Ok(None)` when nothing has been saved yet.
    pub async fn load_last(&mut self) -> StorageResult<Option<Snapshot>> {
        match self.storage.load(&self.key).await {
            Ok(snapshot) => {
                self.dirty = false;
                self.last_save = Some(Instant::now());
                Ok(Some(snapshot))
            }
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind};
    use crate::storage::{MemoryStorage, block_on};

    fn snapshot() -> Snapshot {
        Snapshot {
            elements: vec![Element::new(1, ElementKind::Rectangle, 0, 1)],
            z_index_counter: 2,
            elem_id_counter: 1,
        }
    }

    #[test]
    fn test_autosave_manager_creation() {
        let manager = AutoSaveManager::new(Arc::new(MemoryStorage::new()));
        assert!(!manager.is_dirty());
        assert!(!manager.should_save());
        assert_eq!(manager.key(), LAST_LAYOUT_KEY);
    }

    #[test]
    fn test_autosave_save_clears_dirty() {
        let mut manager = AutoSaveManager::new(Arc::new(MemoryStorage::new()));
        manager.mark_dirty();
        assert!(manager.should_save());

        block_on(manager.save(&snapshot())).unwrap();

        assert!(!manager.is_dirty());
        assert!(!manager.should_save());
    }

    #[test]
    fn test_autosave_respects_interval() {
        let mut manager = AutoSaveManager::new(Arc::new(MemoryStorage::new()));
        manager.set_interval(Duration::from_secs(3600));
        manager.mark_dirty();
        block_on(manager.save(&snapshot())).unwrap();

        manager.mark_dirty();
        assert!(!manager.should_save());
        assert!(manager.is_dirty());
    }

    #[test]
    fn test_autosave_load_last() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = AutoSaveManager::new(storage.clone());
        assert_eq!(block_on(manager.load_last()).unwrap(), None);

        manager.mark_dirty();
        block_on(manager.save(&snapshot())).unwrap();

        let mut restarted = AutoSaveManager::new(storage);
        let loaded = block_on(restarted.load_last()).unwrap();
        assert_eq!(loaded, Some(snapshot()));
    }

    #[test]
    fn test_autosave_custom_key() {
        let storage = Arc::new(MemoryStorage::new());
        let mut manager = AutoSaveManager::new(storage.clone());
        manager.set_key("board-2");
        block_on(manager.save(&snapshot())).unwrap();

        assert_eq!(block_on(storage.load("board-2")).unwrap(), snapshot());
        assert!(matches!(
            block_on(storage.load(LAST_LAYOUT_KEY)),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_failed_save_stays_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(crate::storage::FileStorage::new(dir.path().to_path_buf()).unwrap());
        let mut manager = AutoSaveManager::new(storage);
        manager.set_key("not/a/key");
        manager.mark_dirty();

        assert!(block_on(manager.save(&snapshot())).is_err());
        assert!(manager.is_dirty());
    }
}
