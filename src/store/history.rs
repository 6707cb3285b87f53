use crate::collections::Stack;
use crate::error::Result;
use crate::store::backend::Backend;
use crate::types::{ItemId, Record};

/// A reversible mutation. Each variant carries what it needs to undo itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// `record` was inserted; `replaced` is what held its id before, if anything.
    Add {
        record: Record,
        replaced: Option<Record>,
    },
    Update {
        before: Record,
        after: Record,
    },
    Delete {
        record: Record,
    },
}

impl Change {
    pub fn id(&self) -> ItemId {
        match self {
            Change::Add { record, .. } | Change::Delete { record } => record.id,
            Change::Update { after, .. } => after.id,
        }
    }

    /// Perform the change against `backend`.
    pub(crate) fn apply(&self, backend: &mut dyn Backend) {
        match self {
            Change::Add { record, .. } => {
                backend.upsert(record.clone());
            }
            Change::Update { after, .. } => {
                backend.upsert(after.clone());
            }
            Change::Delete { record } => {
                backend.remove(record.id);
            }
        }
    }

    /// Put `backend` back the way it was before [`apply`](Self::apply).
    pub(crate) fn revert(&self, backend: &mut dyn Backend) {
        match self {
            Change::Add {
                replaced: Some(previous),
                ..
            } => {
                backend.upsert(previous.clone());
            }
            Change::Add { record, replaced: None } => {
                backend.remove(record.id);
            }
            Change::Update { before, .. } => {
                backend.upsert(before.clone());
            }
            Change::Delete { record } => {
                backend.upsert(record.clone());
            }
        }
    }
}

/// Undo and redo stacks.
///
/// Recording a new change clears the redo stack: once the history forks,
/// the undone branch is gone.
#[derive(Debug, Default)]
pub struct History {
    undo: Stack<Change>,
    redo: Stack<Change>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, change: Change) {
        self.undo.push(change);
        self.redo.clear();
    }

    /// Revert the most recent change and move it to the redo stack.
    /// Fails with `EmptyContainer` when there is nothing to undo.
    pub fn undo(&mut self, backend: &mut dyn Backend) -> Result<Change> {
        let change = self.undo.pop()?;
        change.revert(backend);
        self.redo.push(change.clone());
        Ok(change)
    }

    /// Re-apply the most recently undone change.
    /// Fails with `EmptyContainer` when there is nothing to redo.
    pub fn redo(&mut self, backend: &mut dyn Backend) -> Result<Change> {
        let change = self.redo.pop()?;
        change.apply(backend);
        self.undo.push(change.clone());
        Ok(change)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
