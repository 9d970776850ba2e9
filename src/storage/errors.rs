use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open dataset at path [{}]: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Malformed dataset at path [{}]: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: csv::Error
    }
}

impl LoadError {
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open { path: path.to_path_buf(), source }
    }

    pub fn malformed(path: &Path, source: csv::Error) -> Self {
        Self::Malformed { path: path.to_path_buf(), source }
    }
}
