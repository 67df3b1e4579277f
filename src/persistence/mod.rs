//! Persistence of the workflow snapshot, gated behind validation and
//! dirty tracking.
//!
//! The core never touches durable storage directly: everything goes through
//! the injected [`SnapshotStore`] port, so hosts can back it with a file, a
//! browser's keyed storage, or memory. One record with one schema is
//! written, the full [`WorkflowSnapshot`], so there is no secondary
//! node-only record to drift out of sync.

use crate::error::PersistenceError;
use crate::graph::{GraphStore, WorkflowSnapshot};
use crate::validation::{ValidationReport, validate};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The warning surfaced when the session is about to end with unsaved work.
pub const UNSAVED_CHANGES_WARNING: &str =
    "You have unsaved changes. Are you sure you want to leave?";

/// The durable-storage port. Implementations hold exactly one raw snapshot.
pub trait SnapshotStore {
    /// Reads the stored snapshot, `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the stored snapshot. A single synchronous blocking write.
    fn store(&self, snapshot: &str) -> Result<(), PersistenceError>;
}

/// The result of a save attempt that reached a decision: either the
/// snapshot was written, or validation rejected it and nothing was written.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    Rejected(ValidationReport),
}

/// A request to intercept session exit because of unsaved changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitIntercept {
    pub warning: &'static str,
}

/// Gates saving and loading of the workflow behind validation and tracks
/// whether the in-memory graph has unsaved mutations.
///
/// Dirtiness is derived from the store's revision counter: every store
/// mutation bumps it, and the manager remembers the revision it last
/// persisted. A host therefore cannot mutate the store and silently slip
/// past the exit guard; no manual bookkeeping call is required.
pub struct PersistenceManager {
    port: Box<dyn SnapshotStore>,
    saved_revision: Option<u64>,
    forced_dirty: bool,
}

impl PersistenceManager {
    /// Opens a session: loads the persisted snapshot once and hydrates a
    /// store from it. Absent or malformed data is treated as "no saved
    /// workflow" and yields an empty graph; this never fails fatally.
    ///
    /// A session only starts clean when a prior snapshot was actually
    /// loaded; a fresh or unreadable store starts dirty.
    pub fn open(port: Box<dyn SnapshotStore>) -> (Self, GraphStore) {
        let loaded = match port.load() {
            Ok(Some(raw)) => serde_json::from_str::<WorkflowSnapshot>(&raw).ok(),
            _ => None,
        };
        match loaded {
            Some(snapshot) => {
                let store = GraphStore::from_snapshot(snapshot);
                let manager = Self {
                    port,
                    saved_revision: Some(store.revision()),
                    forced_dirty: false,
                };
                (manager, store)
            }
            None => (
                Self {
                    port,
                    saved_revision: None,
                    forced_dirty: true,
                },
                GraphStore::new(),
            ),
        }
    }

    /// Whether the store holds mutations that have not been persisted.
    /// Compares the store's current revision against the one last saved,
    /// so every mutating store operation makes the session dirty.
    pub fn is_dirty(&self, store: &GraphStore) -> bool {
        self.forced_dirty || self.saved_revision != Some(store.revision())
    }

    /// Forces the session dirty regardless of the store's revision, for
    /// changes the store cannot see (a host mutating its own copy of the
    /// snapshot, for example). Cleared by the next successful save.
    pub fn mark_dirty(&mut self) {
        self.forced_dirty = true;
    }

    /// Validates the current graph and persists it if clean.
    ///
    /// The validation report is computed and consumed within this call;
    /// no previously captured report is consulted. A rejected save writes
    /// nothing, and neither a rejection nor a write failure marks the
    /// session clean.
    pub fn save(&mut self, store: &GraphStore) -> Result<SaveOutcome, PersistenceError> {
        let report = validate(&store.snapshot());
        if !report.is_clean() {
            return Ok(SaveOutcome::Rejected(report));
        }
        let raw = serde_json::to_string(&store.workflow_snapshot())
            .map_err(|e| PersistenceError::EncodeFailed(e.to_string()))?;
        self.port.store(&raw)?;
        self.saved_revision = Some(store.revision());
        self.forced_dirty = false;
        Ok(SaveOutcome::Saved)
    }

    /// Consults the dirty state at the moment the session is about to end.
    /// Returns an intercept carrying the unsaved-changes warning if there
    /// is unsaved work, `None` to allow a silent exit.
    pub fn guard_exit(&self, store: &GraphStore) -> Option<ExitIntercept> {
        if self.is_dirty(store) {
            Some(ExitIntercept {
                warning: UNSAVED_CHANGES_WARNING,
            })
        } else {
            None
        }
    }
}
