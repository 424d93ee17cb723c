use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Range;

use super::{Iter, IterMut, Link, Node, NodeRef};
use crate::util::error::{IndexOutOfBounds, InvalidRange};
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `reverse` | `O(n)` |
/// | `retain` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// Sorting relinks the nodes rather than moving values, so no element is copied or moved in
/// memory while the list is reordered.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(NodeRef::value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(NodeRef::value_mut)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(NodeRef::value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(NodeRef::value_mut)
    }

    pub fn push_front(&mut self, value: T) {
        let node = NodeRef::alloc(value, None, self.head);
        match self.head {
            Some(head) => head.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = NodeRef::alloc(value, self.tail, None);
        match self.tail {
            Some(tail) => tail.set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting everything after it back by one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        match index {
            0 => self.push_front(value),
            i if i == self.len => self.push_back(value),
            i if i > self.len => Err(IndexOutOfBounds { index, len: self.len })?,
            i => {
                let next = self.seek(i);
                let prev = next.prev();
                let node = NodeRef::alloc(value, prev, Some(next));
                if let Some(prev) = prev {
                    prev.set_next(Some(node));
                }
                next.set_prev(Some(node));
                self.len += 1;
            },
        }
        Ok(())
    }

    /// Inserts every item of `values` starting at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) {
        self.try_insert_all(index, values).throw()
    }

    pub fn try_insert_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })?
        }
        for (offset, value) in values.into_iter().enumerate() {
            self.try_insert(index + offset, value)?;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Removes the elements in `range`, returning them as a new list in their original order.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<LinkedList<T>, InvalidRange> {
        let Range { start, end } = range;
        if start > end || end > self.len {
            Err(InvalidRange { start, end, len: self.len })?
        }

        let mut removed = LinkedList::new();
        let mut cursor = if start < self.len { Some(self.seek(start)) } else { None };
        for _ in start..end {
            let Some(node) = cursor else { break };
            cursor = node.next();
            removed.push_back(self.unlink(node));
        }
        Ok(removed)
    }

    /// Reverses the order of the list in place by swapping every node's links.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            let next = node.next();
            node.set_next(node.prev());
            node.set_prev(next);
            cursor = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            cursor = node.next();
            if !keep(node.value()) {
                drop(self.unlink(node));
            }
        }
    }

    /// Stable sort using `compare`. Nodes are relinked in sorted order and values never move.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        let mut nodes = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(node) = cursor {
            nodes.push(node);
            cursor = node.next();
        }
        nodes.sort_by(|a, b| compare(a.value(), b.value()));

        let mut prev: Link<T> = None;
        for &node in &nodes {
            node.set_prev(prev);
            match prev {
                Some(prev) => prev.set_next(Some(node)),
                None => self.head = Some(node),
            }
            prev = Some(node);
        }
        if let Some(last) = prev {
            last.set_next(None);
        }
        self.tail = prev;
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) const fn links(&self) -> (Link<T>, Link<T>) {
        (self.head, self.tail)
    }

    fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        if index < self.len {
            Ok(self.seek(index))
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Walks from whichever end is closer. `index` must be in bounds.
    fn seek(&self, index: usize) -> NodeRef<T> {
        let (mut node, steps, forward) = if index <= self.len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, self.len - 1 - index, false)
        };
        for _ in 0..steps {
            node = node.and_then(|n| if forward { n.next() } else { n.prev() });
        }
        // SAFETY: index < len, so the walk never runs past either end.
        unsafe { node.unwrap_unchecked() }
    }

    /// Detaches `node` from its neighbours and frees it.
    fn unlink(&mut self, node: NodeRef<T>) -> T {
        // SAFETY: node belongs to this list, and its neighbours are repaired below before any other
        // access.
        let Node { value, prev, next } = unsafe { node.free() };
        match prev {
            Some(prev) => prev.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => next.set_prev(prev),
            None => self.tail = prev,
        }
        self.len -= 1;
        value
    }
}

impl<T: Ord> LinkedList<T> {
    pub fn sort(&mut self) {
        self.sort_by(T::cmp)
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
