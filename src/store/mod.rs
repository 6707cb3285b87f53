pub mod backend;
pub mod history;
pub mod options;

pub use backend::{Backend, BackendKind, ListBackend, TreeBackend};
pub use history::{Change, History};
pub use options::Options;

use std::path::{Path, PathBuf};

use crate::collections::{Algorithm, DynamicArray};
use crate::error::{Error, Result};
use crate::persist;
use crate::report::{SortKey, Stats};
use crate::types::{ItemId, NewRecord, Record, RecordPatch};

/// The record store: CRUD over one backend, with undo/redo and reports.
///
/// Every mutation goes through a [`Change`], which is applied to the backend
/// and pushed onto the undo stack. When the store is file-backed and
/// `autosave` is on, the whole file is rewritten in id order afterwards.
/// If that write fails the in-memory change still stands and the error is
/// returned; a later successful save brings the file back in line.
pub struct Inventory {
    backend: Box<dyn Backend>,
    history: History,
    options: Options,
    path: Option<PathBuf>,
}

impl Inventory {
    /// Open the inventory file named by `options`. A missing file is an
    /// empty inventory; it is created on the first save.
    pub fn open(options: Options) -> Result<Self> {
        let path = options.file_path();
        let records = persist::load(&path)?;
        let mut inventory = Self::with_records(options, records);
        inventory.path = Some(path);
        Ok(inventory)
    }

    /// A store with no file behind it. `save` is a no-op.
    pub fn in_memory(options: Options) -> Self {
        Self::with_records(options, DynamicArray::new())
    }

    fn with_records(options: Options, records: DynamicArray<Record>) -> Self {
        let mut backend = options.backend.create(options.initial_capacity);
        for record in records {
            if let Some(previous) = backend.upsert(record) {
                tracing::warn!(id = previous.id, "duplicate id in inventory file; last row wins");
            }
        }
        tracing::debug!(backend = %options.backend, records = backend.len(), "inventory ready");
        Inventory {
            backend,
            history: History::new(),
            options,
            path: None,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// File this store saves to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Id the next created record receives: one past the highest id in use.
    /// Fails with `InvalidArgument` once the highest id is `ItemId::MAX`.
    pub fn next_id(&self) -> Result<ItemId> {
        match self.backend.max_id() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                Error::InvalidArgument(format!("no item id left after {max}"))
            }),
        }
    }

    /// Add a new record under the next free id.
    pub fn create(&mut self, fields: NewRecord) -> Result<Record> {
        let record = fields.into_record(self.next_id()?);
        record.validate()?;
        self.commit(Change::Add {
            record: record.clone(),
            replaced: None,
        })?;
        Ok(record)
    }

    /// Insert `record` under its own id, replacing whatever held that id.
    /// Returns the replaced record.
    pub fn upsert(&mut self, record: Record) -> Result<Option<Record>> {
        record.validate()?;
        let replaced = self.backend.get(record.id).cloned();
        self.commit(Change::Add {
            record,
            replaced: replaced.clone(),
        })?;
        Ok(replaced)
    }

    pub fn get(&self, id: ItemId) -> Option<&Record> {
        self.backend.get(id)
    }

    /// Like [`get`](Self::get), but a missing id is `NotFound`.
    pub fn require(&self, id: ItemId) -> Result<&Record> {
        self.get(id).ok_or(Error::NotFound(id))
    }

    /// Change some fields of an existing record. The id is never changed.
    /// Returns the updated record.
    pub fn update(&mut self, id: ItemId, patch: &RecordPatch) -> Result<Record> {
        let before = self.require(id)?.clone();
        let after = patch.apply_to(&before);
        after.validate()?;
        self.commit(Change::Update {
            before,
            after: after.clone(),
        })?;
        Ok(after)
    }

    /// Remove a record and return it.
    pub fn delete(&mut self, id: ItemId) -> Result<Record> {
        let record = self.require(id)?.clone();
        self.commit(Change::Delete {
            record: record.clone(),
        })?;
        Ok(record)
    }

    /// Revert the most recent change. `EmptyContainer` when there is none.
    pub fn undo(&mut self) -> Result<Change> {
        let change = self.history.undo(&mut *self.backend)?;
        tracing::debug!(id = change.id(), ?change, "undo");
        self.autosave()?;
        Ok(change)
    }

    /// Re-apply the most recently undone change. `EmptyContainer` when there
    /// is none.
    pub fn redo(&mut self) -> Result<Change> {
        let change = self.history.redo(&mut *self.backend)?;
        tracing::debug!(id = change.id(), ?change, "redo");
        self.autosave()?;
        Ok(change)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Copies of all records in ascending id order.
    pub fn records(&self) -> DynamicArray<Record> {
        let mut records = DynamicArray::with_capacity(self.len());
        self.backend.for_each_by_id(&mut |record| records.add(record.clone()));
        records
    }

    /// All records sorted by `key` with the chosen algorithm.
    pub fn report(&self, key: SortKey, algorithm: Algorithm) -> Result<DynamicArray<Record>> {
        let mut records = self.records();
        algorithm.sort(&mut records, |a: &Record, b: &Record| key.compare(a, b))?;
        Ok(records)
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(&self.records())
    }

    /// Write every record to the inventory file in id order.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let rows = persist::save(path, &self.records(), self.options.sync)?;
        tracing::info!(path = %path.display(), rows, "inventory saved");
        Ok(())
    }

    fn commit(&mut self, change: Change) -> Result<()> {
        change.apply(&mut *self.backend);
        tracing::debug!(id = change.id(), ?change, "change applied");
        self.history.record(change);
        self.autosave()
    }

    fn autosave(&self) -> Result<()> {
        if self.options.autosave {
            self.save()?;
        }
        Ok(())
    }
}
