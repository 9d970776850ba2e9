use crate::storage::{Dataset, Storage};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Process-wide home of loaded snapshots, keyed by the file they were read from.
pub struct SnapshotStorage {
    cache: Arc<DashMap<PathBuf, Arc<Dataset>>>
}

impl SnapshotStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Storage for SnapshotStorage {
    fn load(&self, path: &Path) -> Option<Arc<Dataset>> {
        self.cache.get(path).map(|entry| entry.value().clone())
    }

    fn save(&self, path: PathBuf, dataset: Arc<Dataset>) {
        self.cache.insert(path, dataset);
    }
}
