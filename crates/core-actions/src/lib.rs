//! Mode engine: routes keystrokes to buffer edits, key sequence dispatch or
//! command-line parsing, and owns the mode transitions between them.
//!
//! * `dispatcher` holds the `Editor` state machine and its per-mode handlers.
//! * `io_ops` defines the persistence boundary (`Persistence`) together with
//!   the load/save operations of the buffer manager.

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::{DispatchResult, Editor};
pub use io_ops::{FsPersistence, MemoryPersistence, PersistError, Persistence};
