mod dataset;
mod errors;
mod loader;
mod snapshot_storage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use dataset::Dataset;
pub use loader::DatasetLoader;
pub use snapshot_storage::SnapshotStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, path: &Path) -> Option<Arc<Dataset>>;
    fn save(&self, path: PathBuf, dataset: Arc<Dataset>);
}
