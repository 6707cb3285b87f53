use crate::collections::DynamicArray;
use crate::error::{Error, Result};

/// LIFO container. Holds the undo and redo histories.
///
/// Sits on a [`DynamicArray`], so it grows the same way: capacity doubles
/// (or jumps to the required size) and never shrinks.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: DynamicArray<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            items: DynamicArray::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: DynamicArray::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.add(item);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Result<T> {
        match self.items.len() {
            0 => Err(Error::EmptyContainer),
            len => self.items.remove_at(len - 1),
        }
    }

    /// Borrow the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        match self.items.len() {
            0 => Err(Error::EmptyContainer),
            len => self.items.get(len - 1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
