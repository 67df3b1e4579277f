//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions of the crate so a
//! host application can pull in the whole core surface with one `use`.

// Graph model and store
pub use crate::graph::{
    Edge, EdgeStyle, GraphSnapshot, GraphStore, Node, NodeKind, NodePatch, NodeStyle, Position,
    WorkflowSnapshot,
};

// Validation
pub use crate::validation::{ValidationReport, validate};

// Persistence
pub use crate::persistence::{
    ExitIntercept, FileStore, MemoryStore, PersistenceManager, SaveOutcome, SnapshotStore,
    UNSAVED_CHANGES_WARNING,
};

// Analytics
pub use crate::analytics::{AnalyticsReport, SeriesPoint, TypeSlice, aggregate};

// Error types
pub use crate::error::PersistenceError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
