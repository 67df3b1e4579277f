use thiserror::Error;

/// Errors that can occur when reading or writing the persisted workflow
/// snapshot through a [`SnapshotStore`](crate::persistence::SnapshotStore).
///
/// A failed write leaves the session dirty; the structural validation
/// errors that block a save are not errors in this sense and travel in the
/// [`ValidationReport`](crate::validation::ValidationReport) instead.
#[derive(Error, Debug, Clone)]
pub enum PersistenceError {
    #[error("Failed to read workflow snapshot: {0}")]
    ReadFailed(String),

    #[error("Failed to write workflow snapshot: {0}")]
    WriteFailed(String),

    #[error("Failed to encode workflow snapshot: {0}")]
    EncodeFailed(String),
}
