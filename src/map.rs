//! Ordered map built on [`RedBlackTree`].
//!
//! This module provides [`OrderedMap`], which stores `(key, value)` pairs in a
//! red-black tree ordered by the key alone.
//!
//! # Examples
//!
//! ```rust
//! use rbkit::map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert_or_assign(3, "THREE");
//!
//! assert_eq!(map.at(&3), Ok(&"THREE"));
//! assert!(map.at(&2).is_err());
//!
//! *map.get_or_insert_default(2) = "two";
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

use crate::compare::{Comparator, Natural};
use crate::error::KeyNotFoundError;
use crate::tree::{self, Cursor, RedBlackTree};

/// Orders `(key, value)` pairs by their key through the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyOrder<C> {
    inner: C,
}

impl<C> KeyOrder<C> {
    /// Returns the comparator applied to keys.
    pub const fn key_comparator(&self) -> &C {
        &self.inner
    }
}

impl<K, V, C: Comparator<K>> Comparator<(K, V)> for KeyOrder<C> {
    #[inline]
    fn less(&self, left: &(K, V), right: &(K, V)) -> bool {
        self.inner.less(&left.0, &right.0)
    }

    #[inline]
    fn compare(&self, left: &(K, V), right: &(K, V)) -> std::cmp::Ordering {
        self.inner.compare(&left.0, &right.0)
    }
}

/// An ordered map with unique keys.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `at`/`get`         | O(log N)   |
/// | `insert`           | O(log N)   |
/// | `insert_or_assign` | O(log N)   |
/// | `erase`/`remove`   | O(log N)   |
/// | `len`/`is_empty`   | O(1)       |
///
/// # Examples
///
/// ```rust
/// use rbkit::map::OrderedMap;
///
/// let map: OrderedMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
/// assert_eq!(format!("{map}"), "{a: 1, b: 2}");
/// ```
pub struct OrderedMap<K, V, C = Natural> {
    tree: RedBlackTree<(K, V), KeyOrder<C>>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map whose keys are ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RedBlackTree::with_comparator(KeyOrder { inner: comparator }),
        }
    }

    /// Returns the number of entries.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of entries a map of this type could hold.
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the cursor of the smallest key.
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

    /// Returns the entry at `cursor`.
    pub fn entry_at(&self, cursor: Cursor) -> Option<(&K, &V)> {
        self.tree.get_at(cursor).map(|(key, value)| (key, value))
    }

    /// Returns the entry at `cursor` with a mutable value.
    pub fn entry_at_mut(&mut self, cursor: Cursor) -> Option<(&K, &mut V)> {
        self.tree
            .get_at_mut(cursor)
            .map(|entry| (&entry.0, &mut entry.1))
    }

    /// Removes the entry at `cursor`; the end cursor is ignored.
    pub fn erase(&mut self, cursor: Cursor) {
        self.tree.erase(cursor);
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// Visits every value mutably in key order.
    pub fn for_each_value_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&K, &mut V),
    {
        let mut cursor = self.tree.begin();
        while let Some((key, value)) = self.tree.get_at_mut(cursor) {
            visit(key, value);
            cursor = self.tree.next(cursor);
        }
    }

    /// Exchanges the contents of two maps in O(1).
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Returns the cursor of `key`, or [`end`](Self::end) if absent.
    pub fn find(&self, key: &K) -> Cursor {
        let order = self.tree.comparator().key_comparator();
        self.tree.locate_by(|(candidate, _)| order.compare(key, candidate))
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.get_at(self.find(key)).map(|(_, value)| value)
    }

    /// Returns the value of `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let cursor = self.find(key);
        self.tree.get_at_mut(cursor).map(|(_, value)| value)
    }

    /// Bounds-checked access to the value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    pub fn at(&self, key: &K) -> Result<&V, KeyNotFoundError> {
        self.get(key).ok_or(KeyNotFoundError {
            container_name: "OrderedMap",
            method_name: "at",
        })
    }

    /// Bounds-checked mutable access to the value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` is absent.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFoundError> {
        self.get_mut(key).ok_or(KeyNotFoundError {
            container_name: "OrderedMap",
            method_name: "at_mut",
        })
    }

    /// Inserts `(key, value)` unless `key` is present.
    ///
    /// Returns the entry's cursor and whether it was inserted; an existing
    /// value is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> (Cursor, bool) {
        self.tree.insert((key, value))
    }

    /// Inserts `(key, value)`, overwriting the value if `key` is present.
    ///
    /// Returns the entry's cursor and `true` if a new entry was created.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Cursor, bool) {
        let cursor = self.find(&key);
        if let Some((_, existing)) = self.tree.get_at_mut(cursor) {
            *existing = value;
            return (cursor, false);
        }
        self.tree.insert((key, value))
    }

    /// Returns the value of `key`, inserting `V::default()` first if absent.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (_, value) = self.tree.get_or_insert_with(
            key,
            |order, key, (candidate, _)| order.key_comparator().compare(key, candidate),
            |key| (key, V::default()),
        );
        value
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let cursor = self.find(key);
        self.tree.extract(cursor).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored entry.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let cursor = self.find(key);
        self.tree.extract(cursor)
    }

    /// Moves every entry of `other` whose key is absent here into this map.
    ///
    /// Colliding entries stay in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`OrderedMap`].
pub struct Iter<'a, K, V, C> {
    inner: tree::Iter<'a, (K, V), KeyOrder<C>>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> DoubleEndedIterator for Iter<'_, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for OrderedMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for OrderedMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = tree::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for OrderedMap<K, V, C> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is absent, like indexing a standard map.
    fn index(&self, key: &K) -> &Self::Output {
        match self.at(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
