use std::cmp::Ordering;

use crate::collections::Stack;

type Link<T> = Option<Box<Node<T>>>;

/// A tree node. Each node exclusively owns its two optional children.
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
        })
    }
}

/// Unbalanced binary search tree ordered by a caller-supplied comparison.
///
/// ```text
///             5
///           /   \
///          3     8        insert 5,3,8,1,4
///         / \             in-order: 1 3 4 5 8
///        1   4
/// ```
///
/// Every key in a node's left subtree compares `Less` than the node, every
/// key on the right compares `Greater`. Inserting an `Equal` key replaces the
/// payload (upsert), so the tree never holds two items that compare equal.
///
/// There is no rebalancing: inserting keys in sorted order builds a chain of
/// depth n. Descent, traversal and teardown are loops rather than recursion,
/// so a chain of any length is safe to walk and drop.
pub struct SortedTree<T, C> {
    root: Link<T>,
    len: usize,
    compare: C,
}

impl<T, C> SortedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        SortedTree {
            root: None,
            len: 0,
            compare,
        }
    }

    /// Insert `item`, or replace the payload of the node that compares equal.
    /// Returns the replaced payload; `len` only grows when this is `None`.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match (self.compare)(&item, &node.item) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(std::mem::replace(&mut node.item, item)),
            }
        }
        *link = Some(Node::leaf(item));
        self.len += 1;
        None
    }

    /// Look up the item that compares equal to `key`.
    pub fn find(&self, key: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            match (self.compare)(key, &node.item) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(&node.item),
            }
        }
        None
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Remove the item that compares equal to `key` and return it.
    ///
    /// A leaf is cut off, a node with one child is replaced by that child,
    /// and a node with two children takes over the payload of its in-order
    /// successor (the minimum of its right subtree), which is then unlinked.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut link = &mut self.root;
        loop {
            let node = link.as_deref()?;
            match (self.compare)(key, &node.item) {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Greater => link = &mut link.as_mut()?.right,
                Ordering::Equal => break,
            }
        }

        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            let successor = take_min(&mut node.right)?;
            self.len -= 1;
            return Some(std::mem::replace(&mut node.item, successor));
        }

        let node = link.take()?;
        let Node { item, left, right } = *node;
        *link = left.or(right);
        self.len -= 1;
        Some(item)
    }

    /// Visit every item in ascending order.
    pub fn in_order_traversal(&self, mut visitor: impl FnMut(&T)) {
        for item in self.iter() {
            visitor(item);
        }
    }
}

impl<T, C> SortedTree<T, C> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest item: the end of the left spine.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.item)
    }

    /// Largest item: the end of the right spine.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.item)
    }

    /// Ascending-order iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            pending: Stack::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Number of nodes on the longest root-to-leaf path. 0 when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Stack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }
        while let Ok((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Drop every node. Walks the tree with an explicit stack so a long
    /// chain does not recurse through `Box` drops.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Ok(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
        self.len = 0;
    }
}

impl<T, C> Drop for SortedTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T, C> IntoIterator for &'a SortedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Detach the leftmost node under `link`, splice its right child into its
/// place, and return its payload.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let node = link.take()?;
    let Node { item, right, .. } = *node;
    *link = right;
    Some(item)
}

/// In-order iterator over a [`SortedTree`].
///
/// Holds the left spine of the unvisited part of the tree: popping a node
/// yields it, then pushes the left spine of its right subtree.
pub struct Iter<'a, T> {
    pending: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.pending.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop().ok()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
