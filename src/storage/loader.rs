use crate::models::Transaction;
use crate::storage::errors::LoadError;
use crate::storage::{Dataset, Storage};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Location of the transaction file, relative to the working directory.
pub const DATASET_PATH: &str = "data/dataset_bee_cycle.csv";

/// Reads the transaction file into a [`Dataset`] and remembers the result in storage.
pub struct DatasetLoader<S: Storage> {
    storage: Arc<S>,
    path: PathBuf
}

impl<S: Storage> DatasetLoader<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            path: PathBuf::from(DATASET_PATH)
        }
    }

    #[cfg(test)]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the snapshot for the configured file, reading it only on first use.
    ///
    /// # Errors
    /// Returns `LoadError` if the file cannot be opened or any record, including its
    /// order date, fails to deserialize. Nothing is stored in that case.
    pub fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.storage.load(&self.path) {
            debug!("Reusing cached snapshot for [{}]", self.path.display());
            return Ok(dataset);
        }

        let timer = Instant::now();
        let dataset = Arc::new(read_dataset(&self.path)?);

        info!("Loaded {} transactions from [{}] in: {:?}", dataset.len(), self.path.display(), timer.elapsed());

        self.storage.save(self.path.clone(), dataset.clone());

        Ok(dataset)
    }
}

fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|error| LoadError::open(path, error))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let records = reader.deserialize::<Transaction>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| LoadError::malformed(path, error))?;

    Ok(Dataset::new(records))
}
