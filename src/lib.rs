//! # Nagare - Workflow Graph Core Engine
//!
//! **Nagare** is the in-process core behind a visual workflow editor: it owns
//! the directed workflow graph (start/task/decision/end nodes connected by
//! edges), validates it against structural rules, persists it through an
//! injected storage port, and derives execution-time analytics from node
//! metadata. The rendering canvas, the property-editor form, and the chart
//! widgets stay outside this crate; they only issue commands into, or render
//! datasets produced by, the core.
//!
//! ## Core Workflow
//!
//! 1. **Open a session**: `PersistenceManager::open` loads the persisted
//!    snapshot (or starts empty) and hands back a [`graph::GraphStore`].
//! 2. **Edit**: the canvas and form translate user gestures into store
//!    commands (`add_node`, `add_edge`, `update_node`, `remove_node`, ...).
//!    Each mutation is copy-on-write, so snapshots held by readers stay
//!    valid, and each bumps the store revision that dirty tracking watches.
//! 3. **Save**: `PersistenceManager::save` runs [`validation::validate`]
//!    over a fresh snapshot and writes only if the report is clean.
//! 4. **Analyze**: [`analytics::aggregate`] turns the node collection into
//!    chart-ready datasets at any time, valid graph or not.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Open a session against a storage port. A file, keyed browser
//!     // storage, or plain memory all work; the core does not care.
//!     let port = FileStore::new("workflow.json");
//!     let (mut manager, mut store) = PersistenceManager::open(Box::new(port));
//!
//!     // The canvas drops palette items and connects them.
//!     let start_id = store.add_node(NodeKind::Start, Position::new(40.0, 40.0)).id.clone();
//!     let task_id = store.add_node(NodeKind::Task, Position::new(200.0, 40.0)).id.clone();
//!     let end_id = store.add_node(NodeKind::End, Position::new(360.0, 40.0)).id.clone();
//!     store.add_edge(&start_id, &task_id);
//!     store.add_edge(&task_id, &end_id);
//!
//!     // The property form edits node metadata.
//!     store.update_node(&task_id, NodePatch::execution_time(120));
//!
//!     // Saving validates first; a rejected save writes nothing.
//!     match manager.save(&store)? {
//!         SaveOutcome::Saved => println!("Workflow saved successfully!"),
//!         SaveOutcome::Rejected(report) => {
//!             for error in &report.errors {
//!                 println!("Validation error: {}", error);
//!             }
//!         }
//!     }
//!
//!     // Analytics are independent of validity and of edges.
//!     let analytics = aggregate(store.nodes());
//!     println!("Total execution time: {} ms", analytics.total);
//!
//!     // The exit guard consults the dirty state at the moment of exit.
//!     if let Some(intercept) = manager.guard_exit(&store) {
//!         println!("{}", intercept.warning);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod error;
pub mod graph;
pub mod persistence;
pub mod prelude;
pub mod validation;
