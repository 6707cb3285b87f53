pub mod array_list;
pub mod sort;
pub mod stack;
pub mod tree;

pub use array_list::DynamicArray;
pub use sort::{Algorithm, merge_sort, quick_sort};
pub use stack::Stack;
pub use tree::SortedTree;

use crate::error::{Error, Result};

/// Index-addressable sequence: the only contract the sorters rely on.
///
/// Anything that can read, overwrite and swap slots by index can be sorted
/// in place, whether it is a [`DynamicArray`] or a plain `Vec`.
pub trait Sequence<T> {
    /// Number of valid slots.
    fn len(&self) -> usize;

    /// Borrow the element at `index`. Fails with `OutOfRange` past the end.
    fn get(&self, index: usize) -> Result<&T>;

    /// Overwrite the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Exchange two slots. Both indices must be in range.
    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        let len = <[T]>::len(self);
        <[T]>::get(self, index).ok_or(Error::OutOfRange { index, len })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let len = <[T]>::len(self);
        match <[T]>::get_mut(self, index) {
            Some(slot) => Ok(std::mem::replace(slot, item)),
            None => Err(Error::OutOfRange { index, len }),
        }
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = <[T]>::len(self);
        for index in [a, b] {
            if index >= len {
                return Err(Error::OutOfRange { index, len });
            }
        }
        <[T]>::swap(self, a, b);
        Ok(())
    }
}
