//! In-memory storage.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::snapshot::Snapshot;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps snapshots in a map. For tests and sessions that should not persist.
#[derive(Default)]
pub struct MemoryStorage {
    snapshots: RwLock<HashMap<String, Snapshot>>,
    saves: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, snapshot: &Snapshot) -> BoxFuture<'_, StorageResult<()>> {
        let key = key.to_string();
        let snapshot = snapshot.clone();
        Box::pin(async move {
            self.snapshots.write().map_err(lock_error)?.insert(key, snapshot);
            self.saves.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
    }

    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<Snapshot>> {
        let key = key.to_string();
        Box::pin(async move {
            let snapshots = self.snapshots.read().map_err(lock_error)?;
            snapshots.get(&key).cloned().ok_or(StorageError::NotFound(key))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind};
    use crate::storage::block_on;

    fn snapshot() -> Snapshot {
        Snapshot {
            elements: vec![Element::new(1, ElementKind::Text, 0, 1)],
            z_index_counter: 2,
            elem_id_counter: 1,
        }
    }

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        let snap = snapshot();

        block_on(storage.save("layout", &snap)).unwrap();
        let loaded = block_on(storage.load("layout")).unwrap();

        assert_eq!(loaded, snap);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = block_on(storage.load("missing"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_save_replaces_and_counts() {
        let storage = MemoryStorage::new();
        let mut snap = snapshot();
        block_on(storage.save("layout", &snap)).unwrap();
        snap.z_index_counter = 9;
        block_on(storage.save("layout", &snap)).unwrap();

        assert_eq!(block_on(storage.load("layout")).unwrap().z_index_counter, 9);
        assert_eq!(storage.save_count(), 2);
    }
}
