//! # Inventory Store
//!
//! A single-user inventory record manager: create, read, update and delete
//! item records kept in a CSV file, with undo/redo and sorted reports.
//!
//! ## Core idea
//! Records live in one of two hand-rolled containers, a dynamic array or an
//! unbalanced binary search tree keyed by id. Reports copy the records into
//! a dynamic array and sort it with a stable merge sort or an in-place quick
//! sort. Every mutation is a reversible [`Change`] kept on a pair of stacks,
//! so undo and redo are just moving changes between them.

pub mod collections;
pub mod error;
pub mod persist;
pub mod report;
pub mod store;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use report::{SortKey, Stats};
pub use store::{BackendKind, Change, Inventory, Options};
pub use types::{ItemId, NewRecord, Record, RecordPatch};
