use crate::collections::Sequence;
use crate::error::{Error, Result};

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Validate a signed capacity. Negative values are `InvalidArgument`.
pub fn checked_capacity(capacity: i64) -> Result<usize> {
    usize::try_from(capacity)
        .map_err(|_| Error::InvalidArgument(format!("illegal capacity: {capacity}")))
}

/// Resizable, index-addressable sequence.
///
/// Growth is explicit rather than left to `Vec`: when an add would overflow,
/// the capacity becomes `max(capacity * 2, required)` and never shrinks,
/// not even on [`clear`](Self::clear). `capacity` is the logical figure;
/// the backing `Vec` is reserved to at least that size on each growth.
///
/// ```text
/// cap=2  [a][b]            add(c) → cap=4  [a][b][c][ ]
///                          add(d) →        [a][b][c][d]
///                          add(e) → cap=8  [a][b][c][d][e][ ][ ][ ]
/// ```
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from a signed capacity, as read from config or a command line.
    /// Negative values are rejected with `InvalidArgument`.
    pub fn try_with_capacity(capacity: i64) -> Result<Self> {
        Ok(Self::with_capacity(checked_capacity(capacity)?))
    }

    /// Append at the end. Amortized O(1).
    pub fn add(&mut self, item: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items.as_slice().get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items.as_mut_slice().get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    /// Overwrite the slot at `index` and hand back what was there.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    /// Remove the element at `index`, shifting everything after it left.
    /// O(len - index).
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// First index whose element satisfies `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots available before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }
        let new_capacity = (self.capacity * 2).max(required);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Remove the first element equal to `item`. Returns whether one was found.
    pub fn remove_value(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        DynamicArray::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        DynamicArray::set(self, index, item)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.items.as_mut_slice().swap(a, b);
        Ok(())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = DynamicArray::new();
        for item in iter {
            array.add(item);
        }
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
