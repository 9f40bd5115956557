//! Iterators over a [`RedBlackTree`].

use std::iter::FusedIterator;

use super::RedBlackTree;
use super::node::NodeId;

/// A borrowing in-order iterator over the keys of a [`RedBlackTree`].
///
/// Steps by successor/predecessor navigation; no stack is kept.
pub struct Iter<'a, T, C> {
    tree: &'a RedBlackTree<T, C>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(super) fn new(tree: &'a RedBlackTree<T, C>) -> Self {
        Self {
            tree,
            front: tree.begin().node,
            back: tree.last().node,
            remaining: tree.len(),
        }
    }
}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.tree.arena.key(self.front)?;
        self.front = self.tree.successor(self.front);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.tree.arena.key(self.back)?;
        self.back = self.tree.predecessor(self.back);
        self.remaining -= 1;
        Some(key)
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

/// An owning in-order iterator over the keys of a [`RedBlackTree`].
pub struct IntoIter<T> {
    keys: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new<C>(mut tree: RedBlackTree<T, C>) -> Self {
        let mut keys = Vec::with_capacity(tree.len());
        let mut current = tree.begin().node;
        while let Some(key) = tree.arena.take_key(current) {
            // Links are untouched by taking the key, so the walk can continue.
            current = tree.successor(current);
            keys.push(key);
        }
        Self {
            keys: keys.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
