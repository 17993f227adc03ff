//! Iterators over a [`Sequence`](crate::Sequence).

use core::iter::FusedIterator;

use slab::Slab;

use crate::Key;
use crate::Sequence;
use crate::sequence::Node;

/// Iterator over references to sequence elements, head to tail.
///
/// Borrows the sequence, so it cannot be structurally modified while the
/// iterator is alive. Cloning an `Iter` gives an independent cursor at the
/// same position; calling [`Sequence::iter`] again restarts from the head.
pub struct Iter<'a, T, K: Key> {
    nodes: &'a Slab<Node<T, K>>,
    current: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iter<'a, T, K> {
    #[inline]
    pub(crate) fn new(nodes: &'a Slab<Node<T, K>>, head: K, len: usize) -> Self {
        Self {
            nodes,
            current: head,
            remaining: len,
        }
    }
}

impl<T, K: Key> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let node = &self.nodes[self.current.as_usize()];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}

/// Owning iterator, shifting values off the front.
pub struct IntoIter<T, K: Key> {
    seq: Sequence<T, K>,
}

impl<T, K: Key> IntoIter<T, K> {
    #[inline]
    pub(crate) fn new(seq: Sequence<T, K>) -> Self {
        Self { seq }
    }
}

impl<T, K: Key> Iterator for IntoIter<T, K> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.seq.shift()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T, K: Key> ExactSizeIterator for IntoIter<T, K> {}

impl<T, K: Key> FusedIterator for IntoIter<T, K> {}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    #[test]
    fn iter_empty() {
        let seq: Sequence<u64> = Sequence::new();
        assert_eq!(seq.iter().next(), None);
        assert_eq!(seq.iter().len(), 0);
    }

    #[test]
    fn iter_head_to_tail() {
        let seq: Sequence<u64> = Sequence::of([3, 1, 2]);
        let values: Vec<_> = seq.iter().copied().collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn iter_is_lazy_and_exact() {
        let seq: Sequence<u64> = Sequence::of(0..5);
        let mut iter = seq.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.nth(2), Some(&3));
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn iter_restarts() {
        let seq: Sequence<u64> = Sequence::of([1, 2, 3]);
        let mut iter = seq.iter();
        iter.next();

        let resumed = iter.clone();
        assert_eq!(resumed.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(seq.iter().count(), 3);
    }

    #[test]
    fn iter_fused_after_end() {
        let seq: Sequence<u64> = Sequence::of([1]);
        let mut iter = seq.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_follows_reversal() {
        let mut seq: Sequence<u64> = Sequence::of([1, 2, 3]);
        seq.reverse();
        let values: Vec<_> = (&seq).into_iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let seq: Sequence<String> = Sequence::of(["a", "b", "c"].map(String::from));
        let mut iter = seq.into_iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
