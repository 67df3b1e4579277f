use super::SnapshotStore;
use crate::error::PersistenceError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A [`SnapshotStore`] backed by a single JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::ReadFailed(format!(
                "Could not read file '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn store(&self, snapshot: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PersistenceError::WriteFailed(format!(
                    "Could not create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        fs::write(&self.path, snapshot).map_err(|e| {
            PersistenceError::WriteFailed(format!(
                "Could not write to file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
