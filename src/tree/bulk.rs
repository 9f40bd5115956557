//! Whole-tree operations: copy, swap and merge.

use smallvec::SmallVec;

use super::RedBlackTree;
use super::node::{Arena, NIL, NodeId, Side};
use crate::compare::Comparator;

/// Inline capacity of the copy stack; covers trees of height up to 64 without
/// touching the heap.
const COPY_STACK_INLINE: usize = 64;

impl<T: Clone, C: Clone> Clone for RedBlackTree<T, C> {
    /// Copies every node, preserving shape and colors.
    ///
    /// The traversal keeps an explicit stack instead of recursing, so the
    /// auxiliary space is bounded by the tree height.
    fn clone(&self) -> Self {
        let mut copy = Self {
            arena: Arena::with_capacity(self.length),
            root: NIL,
            length: 0,
            comparator: self.comparator.clone(),
        };
        copy.copy_nodes_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.comparator = source.comparator.clone();
        self.copy_nodes_from(source);
    }
}

impl<T: Clone, C> RedBlackTree<T, C> {
    /// Rebuilds `source`'s nodes into this (empty) tree.
    fn copy_nodes_from(&mut self, source: &Self) {
        let mut pending: SmallVec<[(NodeId, NodeId, Side); COPY_STACK_INLINE]> = SmallVec::new();
        pending.push((source.root, NIL, Side::Left));

        while let Some((original, parent, side)) = pending.pop() {
            let Some(key) = source.arena.key(original) else {
                continue;
            };
            let node = self.arena.allocate(key.clone());
            self.arena[node].color = source.arena[original].color;
            self.link(parent, node, side);

            if original == source.arena[NIL].left {
                self.arena[NIL].left = node;
            }
            if original == source.arena[NIL].right {
                self.arena[NIL].right = node;
            }

            pending.push((source.arena[original].right, node, Side::Right));
            pending.push((source.arena[original].left, node, Side::Left));
        }
        self.length = source.length;
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Exchanges the contents of two trees, comparators included, in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkit::tree::RedBlackTree;
    ///
    /// let mut small: RedBlackTree<i32> = (0..2).collect();
    /// let mut large: RedBlackTree<i32> = (0..8).collect();
    /// small.swap(&mut large);
    /// assert_eq!(small.len(), 8);
    /// assert_eq!(large.len(), 2);
    /// ```
    pub const fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out, leaving an empty tree with a default comparator.
    pub fn take(&mut self) -> Self
    where
        C: Default,
    {
        std::mem::take(self)
    }
}

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Moves every key of `other` that is absent from `self` into `self`.
    ///
    /// Keys that collide with keys already in `self` stay in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkit::tree::RedBlackTree;
    ///
    /// let mut left: RedBlackTree<i32> = [1, 3, 5].into_iter().collect();
    /// let mut right: RedBlackTree<i32> = [3, 4, 6].into_iter().collect();
    /// left.merge(&mut right);
    ///
    /// assert_eq!(left.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 6]);
    /// assert_eq!(right.iter().copied().collect::<Vec<_>>(), vec![3]);
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let mut position = other.begin();
        while let Some(key) = other.get_at(position) {
            let following = other.next(position);
            if !self.contains(key) {
                // Extraction relocates nodes without rekeying them, so
                // `following` still names the next key.
                if let Some(moved) = other.extract(position) {
                    self.insert(moved);
                }
            }
            position = following;
        }
    }
}
