//! Singly-linked sequence with positional access.
//!
//! Nodes live in a [`slab::Slab`] owned by the sequence and point forward
//! through [`Key`]s. The sequence tracks `head`, `tail` and its length; there
//! are no back links, so anything that needs a predecessor walks from the
//! head.
//!
//! # Invariants
//!
//! - `len == 0` iff `head` and `tail` are both `NONE`
//! - `len == 1` implies `head == tail`
//! - otherwise walking `next` from `head` reaches `tail` in `len - 1` hops
//! - `tail.next` is `NONE`
//! - the slab holds exactly `len` nodes
//!
//! # Example
//!
//! ```
//! use kata_sequence::Sequence;
//!
//! let mut seq: Sequence<u64> = Sequence::of([1, 2, 3]);
//!
//! assert!(seq.insert(1, 100));
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 100, 2, 3]);
//!
//! assert_eq!(seq.remove(2), Some(2));
//! assert_eq!(seq.pop(), Some(3));
//! assert_eq!(seq.shift(), Some(1));
//! assert_eq!(seq.len(), 1);
//! ```

use core::fmt;
use core::mem;

use log::trace;
use slab::Slab;

use crate::{IntoIter, Iter, Key, OutOfRange};

/// A chain element: one value and the key of its successor.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, K: Key> {
    pub(crate) value: T,
    pub(crate) next: K,
}

/// A singly-linked sequence addressed by position.
///
/// Positions are zero-based. Out-of-range requests never panic: readers
/// return `None`, the boolean mutators return `false`, and the `try_`/
/// `replace` forms hand the rejected value back in an [`OutOfRange`].
///
/// # Type Parameters
///
/// - `T`: element type
/// - `K`: link type (default `u32`), bounds the number of live nodes
///
/// # Example
///
/// ```
/// use kata_sequence::Sequence;
///
/// let mut seq: Sequence<&str> = Sequence::new();
/// assert_eq!(seq.push("b"), 1);
/// assert_eq!(seq.unshift("a"), 2);
/// assert_eq!(seq.get(0), Some(&"a"));
/// assert_eq!(seq.get(5), None);
/// assert!(!seq.set(5, "z"));
/// ```
#[derive(Clone)]
pub struct Sequence<T, K: Key = u32> {
    nodes: Slab<Node<T, K>>,
    head: K,
    tail: K,
    len: usize,
}

impl<T, K: Key> Default for Sequence<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Sequence<T, K> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Builds a sequence from `values`, left to right.
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.node(self.head).value)
        }
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.node(self.tail).value)
        }
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Returns the element at `index`, walking from the head.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let key = self.key_at(index)?;
        Some(&self.node(key).value)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let key = self.key_at(index)?;
        Some(&mut self.node_mut(key).value)
    }

    /// Overwrites the element at `index` in place.
    ///
    /// Returns `false` without touching the sequence if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        self.replace(index, value).is_ok()
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfRange)` carrying `value` if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, OutOfRange<T>> {
        match self.key_at(index) {
            Some(key) => Ok(mem::replace(&mut self.node_mut(key).value, value)),
            None => Err(OutOfRange {
                value,
                index,
                len: self.len,
            }),
        }
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Accepts `0..=len`; `index == len` appends. Returns `false` without
    /// touching the sequence otherwise.
    pub fn insert(&mut self, index: usize, value: T) -> bool {
        self.try_insert(index, value).is_ok()
    }

    /// Inserts `value` at `index`, returning the new length.
    ///
    /// `index == 0` prepends, `index == len` appends, anything between is
    /// spliced in after the node at `index - 1`.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfRange)` carrying `value` if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, OutOfRange<T>> {
        if index > self.len {
            trace!("insert rejected: index {} > length {}", index, self.len);
            return Err(OutOfRange {
                value,
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return Ok(self.unshift(value));
        }
        if index == self.len {
            return Ok(self.push(value));
        }

        let prev = self.walk(index - 1);
        let next = self.node(prev).next;
        let key = self.alloc(value, next);
        self.node_mut(prev).next = key;
        self.len += 1;
        Ok(self.len)
    }

    /// Removes and returns the element at `index`.
    ///
    /// `index == 0` behaves as [`shift`](Self::shift), `index == len - 1` as
    /// [`pop`](Self::pop). Returns `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            trace!("remove rejected: index {} >= length {}", index, self.len);
            return None;
        }

        if index == 0 {
            return self.shift();
        }
        if index == self.len - 1 {
            return self.pop();
        }

        let prev = self.walk(index - 1);
        let target = self.node(prev).next;
        let removed = self.nodes.remove(target.as_usize());
        self.node_mut(prev).next = removed.next;
        self.len -= 1;
        Some(removed.value)
    }

    // ========================================================================
    // Stack / queue operations
    // ========================================================================

    /// Appends `value`, returning the new length.
    ///
    /// # Panics
    ///
    /// Panics if the number of live nodes would reach `K::NONE`.
    pub fn push(&mut self, value: T) -> usize {
        let key = self.alloc(value, K::NONE);

        if self.tail.is_some() {
            let tail = self.tail;
            self.node_mut(tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
        self.len
    }

    /// Appends every value in order, returning the new length.
    pub fn push_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        for value in values {
            self.push(value);
        }
        self.len
    }

    /// Removes and returns the last element.
    ///
    /// O(len): the new tail is found by walking from the head.
    pub fn pop(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        if self.len == 1 {
            return self.shift();
        }

        let new_tail = self.walk(self.len - 2);
        let removed = self.nodes.remove(self.tail.as_usize());
        self.node_mut(new_tail).next = K::NONE;
        self.tail = new_tail;
        self.len -= 1;
        Some(removed.value)
    }

    /// Prepends `value`, returning the new length.
    ///
    /// # Panics
    ///
    /// Panics if the number of live nodes would reach `K::NONE`.
    pub fn unshift(&mut self, value: T) -> usize {
        let key = self.alloc(value, self.head);

        if self.tail.is_none() {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
        self.len
    }

    /// Prepends every value in turn, returning the new length.
    ///
    /// Each value becomes the new head, so the last one yielded ends up
    /// first:
    ///
    /// ```
    /// use kata_sequence::Sequence;
    ///
    /// let mut seq: Sequence<u8> = Sequence::of([9]);
    /// seq.unshift_many([1, 2, 3]);
    /// assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1, 9]);
    /// ```
    pub fn unshift_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> usize {
        for value in values {
            self.unshift(value);
        }
        self.len
    }

    /// Removes and returns the first element. O(1).
    pub fn shift(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let removed = self.nodes.remove(self.head.as_usize());
        self.head = removed.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }

        self.len -= 1;
        Some(removed.value)
    }

    /// Reverses the sequence in place by flipping every link.
    pub fn reverse(&mut self) {
        let mut prev = K::NONE;
        let mut current = self.head;

        while current.is_some() {
            let next = mem::replace(&mut self.node_mut(current).next, prev);
            prev = current;
            current = next;
        }

        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    /// Returns an iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Stores a new node and returns its key.
    fn alloc(&mut self, value: T, next: K) -> K {
        let slot = self.nodes.vacant_key();
        assert!(
            slot < K::NONE.as_usize(),
            "sequence exceeds key type capacity"
        );
        self.nodes.insert(Node { value, next });
        K::from_usize(slot)
    }

    /// Key of the node at `index`, or `None` when out of range.
    fn key_at(&self, index: usize) -> Option<K> {
        if index >= self.len {
            trace!("index {} out of range for length {}", index, self.len);
            return None;
        }
        Some(self.walk(index))
    }

    /// Follows `steps` links from the head. Caller guarantees `steps < len`.
    fn walk(&self, steps: usize) -> K {
        debug_assert!(steps < self.len);
        let mut key = self.head;
        for _ in 0..steps {
            key = self.node(key).next;
        }
        key
    }

    #[inline]
    fn node(&self, key: K) -> &Node<T, K> {
        &self.nodes[key.as_usize()]
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut Node<T, K> {
        &mut self.nodes[key.as_usize()]
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: fmt::Debug, K: Key> fmt::Debug for Sequence<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, K: Key> PartialEq for Sequence<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Key> Eq for Sequence<T, K> {}

impl<T, K: Key> FromIterator<T> for Sequence<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = Self::with_capacity(iter.size_hint().0);
        seq.push_many(iter);
        seq
    }
}

impl<T, K: Key> Extend<T> for Sequence<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_many(iter);
    }
}

impl<T, K: Key> From<Vec<T>> for Sequence<T, K> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, K: Key, const N: usize> From<[T; N]> for Sequence<T, K> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, K: Key> IntoIterator for &'a Sequence<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, K: Key> IntoIterator for Sequence<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
