use super::SnapshotStore;
use crate::error::PersistenceError;
use std::sync::{Arc, Mutex};

/// An in-memory [`SnapshotStore`], the keyed-storage analogue used by tests
/// and by hosts without a filesystem.
///
/// Clones share the same slot, so a test can keep one handle while the
/// manager owns another and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// An empty store: loading yields "no saved workflow".
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw snapshot, as if a prior session saved.
    pub fn with_snapshot(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The currently stored raw snapshot, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| PersistenceError::ReadFailed("storage lock poisoned".to_string()))
    }

    fn store(&self, snapshot: &str) -> Result<(), PersistenceError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| PersistenceError::WriteFailed("storage lock poisoned".to_string()))?;
        *slot = Some(snapshot.to_string());
        Ok(())
    }
}
