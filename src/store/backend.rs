use std::cmp::Ordering;
use std::fmt;

use crate::collections::{DynamicArray, SortedTree, merge_sort};
use crate::types::{ItemId, Record};

/// Storage container behind an [`Inventory`](crate::store::Inventory).
///
/// Both implementations key records by `Record::id` and upsert on an
/// existing id, so the store behaves the same whichever one it holds.
pub trait Backend {
    /// Insert `record`, replacing any record with the same id.
    /// Returns the replaced record.
    fn upsert(&mut self, record: Record) -> Option<Record>;

    fn get(&self, id: ItemId) -> Option<&Record>;

    fn remove(&mut self, id: ItemId) -> Option<Record>;

    fn len(&self) -> usize;

    /// Visit every record in ascending id order.
    fn for_each_by_id(&self, visit: &mut dyn FnMut(&Record));

    fn kind(&self) -> BackendKind;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn max_id(&self) -> Option<ItemId> {
        let mut max = None;
        self.for_each_by_id(&mut |record| max = Some(record.id));
        max
    }
}

/// Which container holds the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Binary search tree ordered by id. Lookups follow one root-to-leaf path.
    #[default]
    Tree,
    /// Dynamic array in insertion order. Lookups scan linearly.
    List,
}

impl BackendKind {
    pub fn create(self, initial_capacity: usize) -> Box<dyn Backend> {
        match self {
            BackendKind::Tree => Box::new(TreeBackend::new()),
            BackendKind::List => Box::new(ListBackend::with_capacity(initial_capacity)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Tree => write!(f, "tree"),
            BackendKind::List => write!(f, "list"),
        }
    }
}

fn compare_ids(a: &Record, b: &Record) -> Ordering {
    a.id.cmp(&b.id)
}

type IdOrder = fn(&Record, &Record) -> Ordering;

/// Records in a [`SortedTree`] ordered by id.
pub struct TreeBackend {
    tree: SortedTree<Record, IdOrder>,
}

impl TreeBackend {
    pub fn new() -> Self {
        TreeBackend {
            tree: SortedTree::new(compare_ids as IdOrder),
        }
    }

    /// Depth of the underlying tree. Sequential ids build a chain.
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl Default for TreeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TreeBackend {
    fn upsert(&mut self, record: Record) -> Option<Record> {
        self.tree.insert(record)
    }

    fn get(&self, id: ItemId) -> Option<&Record> {
        self.tree.find(&Record::key_only(id))
    }

    fn remove(&mut self, id: ItemId) -> Option<Record> {
        self.tree.remove(&Record::key_only(id))
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn for_each_by_id(&self, visit: &mut dyn FnMut(&Record)) {
        self.tree.in_order_traversal(visit);
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Tree
    }

    fn max_id(&self) -> Option<ItemId> {
        self.tree.max().map(|record| record.id)
    }
}

/// Records in a [`DynamicArray`], kept in insertion order.
pub struct ListBackend {
    items: DynamicArray<Record>,
}

impl ListBackend {
    pub fn with_capacity(capacity: usize) -> Self {
        ListBackend {
            items: DynamicArray::with_capacity(capacity),
        }
    }

    fn index_of_id(&self, id: ItemId) -> Option<usize> {
        self.items.position(|record| record.id == id)
    }
}

impl Backend for ListBackend {
    fn upsert(&mut self, record: Record) -> Option<Record> {
        match self.index_of_id(record.id) {
            Some(index) => self.items.set(index, record).ok(),
            None => {
                self.items.add(record);
                None
            }
        }
    }

    fn get(&self, id: ItemId) -> Option<&Record> {
        let index = self.index_of_id(id)?;
        self.items.get(index).ok()
    }

    fn remove(&mut self, id: ItemId) -> Option<Record> {
        let index = self.index_of_id(id)?;
        self.items.remove_at(index).ok()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn for_each_by_id(&self, visit: &mut dyn FnMut(&Record)) {
        let mut ordered: DynamicArray<&Record> = self.items.iter().collect();
        if let Err(e) = merge_sort(&mut ordered, |a: &&Record, b: &&Record| compare_ids(a, b)) {
            tracing::error!(error = %e, "failed to order records by id");
        }
        for &record in &ordered {
            visit(record);
        }
    }

    fn kind(&self) -> BackendKind {
        BackendKind::List
    }

    fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|record| record.id).max()
    }
}
