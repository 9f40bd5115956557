//! Deletion.
//!
//! The node being removed is never re-keyed. When it has two children it
//! trades *positions* (links and color) with an in-order neighbour, then with
//! its remaining child if it is black, until it sits where it can be cut off
//! as a leaf. Cursors to every other node therefore stay valid.

use super::node::{NIL, NodeId, Side};
use super::{Cursor, RedBlackTree};
use crate::compare::Comparator;

impl<T, C> RedBlackTree<T, C> {
    /// Removes the key at `position`.
    ///
    /// Does nothing for the end cursor or a cursor whose key was already erased,
    /// even if the freed slot has since been reused by another key.
    pub fn erase(&mut self, position: Cursor) {
        drop(self.extract(position));
    }

    /// Removes the key at `position` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkit::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = (1..=5).collect();
    /// let cursor = tree.find(&3);
    /// assert_eq!(tree.extract(cursor), Some(3));
    /// assert_eq!(tree.extract(cursor), None);
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn extract(&mut self, position: Cursor) -> Option<T> {
        let target = self.resolve(position)?;

        // Bounds move to the in-order neighbours; positions are not rekeyed,
        // so these handles survive the restructuring below.
        if self.arena[NIL].left == target {
            self.arena[NIL].left = self.successor(target);
        }
        if self.arena[NIL].right == target {
            self.arena[NIL].right = self.predecessor(target);
        }

        let left = self.arena[target].left;
        let right = self.arena[target].right;
        if !left.is_nil() && !right.is_nil() {
            let neighbour = self.swap_partner(target);
            self.relocate(target, neighbour);
        }

        if self.is_black(target) {
            let left = self.arena[target].left;
            let child = if left.is_nil() {
                self.arena[target].right
            } else {
                left
            };
            if !child.is_nil() {
                self.relocate(target, child);
            }
        }

        if self.is_black(target) {
            self.delete_fixup(target);
        }

        let parent = self.arena[target].parent;
        let side = self.arena[target].side();
        self.link(parent, NIL, side);
        self.length -= 1;
        self.arena.release(target)
    }

    /// Removes and returns the smallest key.
    pub fn pop_first(&mut self) -> Option<T> {
        self.extract(self.begin())
    }

    /// Removes and returns the largest key.
    pub fn pop_last(&mut self) -> Option<T> {
        self.extract(self.last())
    }

    /// Picks the in-order neighbour that trades places with a two-child `node`.
    ///
    /// The successor is preferred; when it has a right child the predecessor is
    /// taken instead. Either way the partner has at most one child.
    fn swap_partner(&self, node: NodeId) -> NodeId {
        let successor = self.leftmost(self.arena[node].right);
        if self.arena[successor].right.is_nil() {
            successor
        } else {
            self.rightmost(self.arena[node].left)
        }
    }

    /// Exchanges the tree positions of `upper` and its descendant `lower`.
    ///
    /// Colors travel with the positions, so the shape and coloring of the tree
    /// are unchanged; only which node occupies each position differs.
    fn relocate(&mut self, upper: NodeId, lower: NodeId) {
        let upper_parent = self.arena[upper].parent;
        let upper_side = self.arena[upper].side();
        let upper_left = self.arena[upper].left;
        let upper_right = self.arena[upper].right;
        let upper_color = self.arena[upper].color;

        let lower_parent = self.arena[lower].parent;
        let lower_side = self.arena[lower].side();
        let lower_left = self.arena[lower].left;
        let lower_right = self.arena[lower].right;
        let lower_color = self.arena[lower].color;

        self.arena[upper].color = lower_color;
        self.arena[lower].color = upper_color;

        self.link(upper_parent, lower, upper_side);
        if lower_parent == upper {
            match lower_side {
                Side::Left => {
                    self.link(lower, upper, Side::Left);
                    self.link(lower, upper_right, Side::Right);
                }
                Side::Right => {
                    self.link(lower, upper_left, Side::Left);
                    self.link(lower, upper, Side::Right);
                }
            }
        } else {
            self.link(lower, upper_left, Side::Left);
            self.link(lower, upper_right, Side::Right);
            self.link(lower_parent, upper, lower_side);
        }
        self.link(upper, lower_left, Side::Left);
        self.link(upper, lower_right, Side::Right);
    }
}

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Removes `key` and returns the stored key.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let position = self.find(key);
        self.extract(position)
    }
}
