//! Ordered set built on [`RedBlackTree`].
//!
//! # Examples
//!
//! ```rust
//! use rbkit::set::OrderedSet;
//!
//! let mut left: OrderedSet<i32> = [1, 3, 5].into_iter().collect();
//! let mut right: OrderedSet<i32> = [3, 4, 6].into_iter().collect();
//! left.merge(&mut right);
//!
//! assert_eq!(format!("{left}"), "{1, 3, 4, 5, 6}");
//! assert_eq!(format!("{right}"), "{3}");
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::compare::{Comparator, Natural};
use crate::tree::{self, Cursor, RedBlackTree};

/// An ordered set of unique elements.
pub struct OrderedSet<T, C = Natural> {
    tree: RedBlackTree<T, C>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RedBlackTree::with_comparator(comparator),
        }
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of elements a set of this type could hold.
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the cursor of the smallest element.
    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    /// Returns the past-the-end cursor.
    pub const fn end(&self) -> Cursor {
        self.tree.end()
    }

    /// Returns the cursor following `cursor`.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.tree.next(cursor)
    }

    /// Returns the cursor preceding `cursor`.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.tree.prev(cursor)
    }

    /// Returns the element at `cursor`.
    pub fn get_at(&self, cursor: Cursor) -> Option<&T> {
        self.tree.get_at(cursor)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.tree.first_key()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.tree.last_key()
    }

    /// Removes the element at `cursor`; the end cursor is ignored.
    pub fn erase(&mut self, cursor: Cursor) {
        self.tree.erase(cursor);
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> tree::Iter<'_, T, C> {
        self.tree.iter()
    }

    /// Exchanges the contents of two sets in O(1).
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Inserts `value`, returning its cursor and whether it was new.
    pub fn insert(&mut self, value: T) -> (Cursor, bool) {
        self.tree.insert(value)
    }

    /// Returns the cursor of `value`, or [`end`](Self::end) if absent.
    pub fn find(&self, value: &T) -> Cursor {
        self.tree.find(value)
    }

    /// Returns `true` if `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.tree.contains(value)
    }

    /// Removes `value` and returns the stored element.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.tree.remove(value)
    }

    /// Moves every element of `other` absent here into this set.
    ///
    /// Colliding elements stay in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }
}

impl<T, C: Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for OrderedSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = tree::Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;
    type IntoIter = tree::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<T: PartialEq, C> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq, C> Eq for OrderedSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, formatter)
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}
