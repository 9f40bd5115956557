//! Arena-backed red-black tree.
//!
//! This module provides [`RedBlackTree`], the ordered-key engine underneath
//! [`OrderedMap`](crate::map::OrderedMap) and [`OrderedSet`](crate::set::OrderedSet).
//!
//! # Overview
//!
//! - O(log N) `find`, `insert`, `erase`
//! - O(1) `begin`/`last` through the sentinel's cached bounds
//! - O(1) amortized cursor stepping, O(N) full traversal without a stack
//! - O(1) `swap`, O(N) `clone`, O(M log(N + M)) `merge`
//!
//! Positions are exposed as [`Cursor`] values, which play the role of C++-style
//! iterators: they are plain copyable handles, stepped with
//! [`RedBlackTree::next`] and [`RedBlackTree::prev`] and dereferenced with
//! [`RedBlackTree::get_at`]. A cursor stays valid until its own element is
//! erased; inserting or erasing other elements never moves it. Once erased,
//! the cursor never resolves again, even after its slot is reused.
//!
//! # Examples
//!
//! ```rust
//! use rbkit::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [5, 1, 4, 2, 3] {
//!     tree.insert(key);
//! }
//!
//! let sorted: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//!
//! let cursor = tree.find(&4);
//! tree.erase(cursor);
//! assert!(!tree.contains(&4));
//! assert_eq!(tree.len(), 4);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every public operation:
//! 1. The sentinel is black
//! 2. A red node has two black children
//! 3. Every root-to-sentinel path has the same number of black nodes
//! 4. Keys are unique and strictly increasing in order
//! 5. `len` equals the number of live nodes reachable from the root

mod balance;
mod bulk;
pub mod inspect;
mod iter;
mod node;
mod remove;

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::compare::{Comparator, Natural};

pub use iter::{IntoIter, Iter};
pub use node::Color;
use node::{Arena, NIL, Node, NodeId, Side};

// =============================================================================
// Cursor Definition
// =============================================================================

/// A position inside a [`RedBlackTree`].
///
/// The end position is the tree's sentinel. Stepping past the last element
/// yields the end position, and stepping forward from the end position wraps
/// around to the first element.
///
/// A cursor records the allocation stamp of its node, so a cursor whose
/// element was erased is recognised as stale even if the slot now holds a
/// different key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: NodeId,
    generation: u64,
}

impl Cursor {
    const END: Self = Self {
        node: NIL,
        generation: 0,
    };

    /// Returns `true` if this is the end position.
    pub const fn is_end(self) -> bool {
        self.node.is_nil()
    }
}

static_assertions::assert_impl_all!(Cursor: Copy, Send, Sync);

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered collection of unique keys kept balanced by red-black coloring.
///
/// Ordering comes from the comparator `C`, [`Natural`] by default.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `find`         | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `erase`        | O(log N)          |
/// | `begin`/`last` | O(1)              |
/// | `next`/`prev`  | O(1) amortized    |
/// | `clone`        | O(N)              |
/// | `swap`         | O(1)              |
/// | `merge`        | O(M log(N + M))   |
///
/// # Examples
///
/// ```rust
/// use rbkit::compare::Reverse;
/// use rbkit::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::with_comparator(Reverse);
/// assert_eq!(tree.insert(1).1, true);
/// assert_eq!(tree.insert(3).1, true);
/// assert_eq!(tree.insert(1).1, false);
///
/// let keys: Vec<i32> = tree.iter().copied().collect();
/// assert_eq!(keys, vec![3, 1]);
/// ```
pub struct RedBlackTree<T, C = Natural> {
    arena: Arena<T>,
    /// The sentinel when the tree is empty.
    root: NodeId,
    length: usize,
    comparator: C,
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(RedBlackTree<String, crate::compare::Reverse>: Send, Sync);

impl<T> RedBlackTree<T> {
    /// Creates an empty tree ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: NIL,
            length: 0,
            comparator,
        }
    }

    /// Returns the number of keys.
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the largest number of keys a tree of this type could hold.
    pub const fn max_size(&self) -> usize {
        isize::MAX.unsigned_abs() / std::mem::size_of::<Node<T>>()
    }

    /// Returns the comparator ordering this tree.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.root = NIL;
        self.length = 0;
    }

    // =========================================================================
    // Cursor Navigation
    // =========================================================================

    /// Returns the cursor of the smallest key, or [`end`](Self::end) if empty.
    pub fn begin(&self) -> Cursor {
        self.cursor_at(self.arena[NIL].left)
    }

    /// Returns the cursor of the largest key, or [`end`](Self::end) if empty.
    pub fn last(&self) -> Cursor {
        self.cursor_at(self.arena[NIL].right)
    }

    /// Returns the past-the-end cursor.
    pub const fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Returns the cursor following `cursor` in key order.
    ///
    /// A cursor whose element was erased steps to the end position.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        if self.is_stale(cursor) {
            return Cursor::END;
        }
        self.cursor_at(self.successor(cursor.node))
    }

    /// Returns the cursor preceding `cursor` in key order.
    ///
    /// A cursor whose element was erased steps to the end position.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        if self.is_stale(cursor) {
            return Cursor::END;
        }
        self.cursor_at(self.predecessor(cursor.node))
    }

    fn is_stale(&self, cursor: Cursor) -> bool {
        !cursor.is_end() && self.resolve(cursor).is_none()
    }

    pub(crate) fn cursor_at(&self, node: NodeId) -> Cursor {
        Cursor {
            node,
            generation: self.arena[node].generation,
        }
    }

    /// Returns the node `cursor` addresses if that node is still live.
    pub(crate) fn resolve(&self, cursor: Cursor) -> Option<NodeId> {
        self.arena
            .is_current(cursor.node, cursor.generation)
            .then_some(cursor.node)
    }

    /// Returns the key at `cursor`, or `None` for the end or an erased position.
    pub fn get_at(&self, cursor: Cursor) -> Option<&T> {
        self.resolve(cursor).and_then(|node| self.arena.key(node))
    }

    /// Mutable access for adapters whose mutation cannot affect ordering.
    pub(crate) fn get_at_mut(&mut self, cursor: Cursor) -> Option<&mut T> {
        let node = self.resolve(cursor)?;
        self.arena.key_mut(node)
    }

    /// Returns the smallest key.
    pub fn first_key(&self) -> Option<&T> {
        self.get_at(self.begin())
    }

    /// Returns the largest key.
    pub fn last_key(&self) -> Option<&T> {
        self.get_at(self.last())
    }

    /// Returns an iterator over the keys in order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    pub(crate) fn successor(&self, node: NodeId) -> NodeId {
        if node.is_nil() {
            return self.arena[NIL].left;
        }
        let right = self.arena[node].right;
        if !right.is_nil() {
            return self.leftmost(right);
        }
        let mut current = node;
        while !self.arena[current].is_left_child && !self.arena[current].parent.is_nil() {
            current = self.arena[current].parent;
        }
        self.arena[current].parent
    }

    pub(crate) fn predecessor(&self, node: NodeId) -> NodeId {
        if node.is_nil() {
            return self.arena[NIL].right;
        }
        let left = self.arena[node].left;
        if !left.is_nil() {
            return self.rightmost(left);
        }
        let mut current = node;
        while self.arena[current].is_left_child && !self.arena[current].parent.is_nil() {
            current = self.arena[current].parent;
        }
        self.arena[current].parent
    }

    fn leftmost(&self, mut node: NodeId) -> NodeId {
        while !self.arena[node].left.is_nil() {
            node = self.arena[node].left;
        }
        node
    }

    fn rightmost(&self, mut node: NodeId) -> NodeId {
        while !self.arena[node].right.is_nil() {
            node = self.arena[node].right;
        }
        node
    }

    /// Descends from the root steered by `direction`, which reports how the sought
    /// key compares to each visited key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkit::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<(i32, char)> = [(1, 'a'), (2, 'b')].into_iter().collect();
    /// let cursor = tree.locate_by(|(key, _)| 2.cmp(key));
    /// assert_eq!(tree.get_at(cursor), Some(&(2, 'b')));
    /// ```
    pub fn locate_by<F>(&self, direction: F) -> Cursor
    where
        F: FnMut(&T) -> Ordering,
    {
        match self.search_by(direction) {
            Ok(node) => self.cursor_at(node),
            Err(_) => Cursor::END,
        }
    }

    /// Finds the node `direction` accepts, or the parent and side where it would hang.
    fn search_by<F>(&self, mut direction: F) -> Result<NodeId, (NodeId, Side)>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(key) = self.arena.key(current) {
            side = match direction(key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Ok(current),
            };
            parent = current;
            current = self.arena[current].child(side);
        }
        Err((parent, side))
    }

    /// Hangs a fresh red node under `parent` and rebalances.
    ///
    /// The node is returned without a key; the caller stores one before the
    /// tree is observed again.
    fn attach(&mut self, parent: NodeId, side: Side) -> NodeId {
        let node = self.arena.allocate_slot();
        self.link(parent, node, side);
        if parent.is_nil() {
            self.arena[node].color = Color::Black;
            self.arena[NIL].left = node;
            self.arena[NIL].right = node;
        } else {
            if parent == self.arena[NIL].left && side == Side::Left {
                self.arena[NIL].left = node;
            }
            if parent == self.arena[NIL].right && side == Side::Right {
                self.arena[NIL].right = node;
            }
        }
        self.length += 1;
        self.insert_fixup(node);
        node
    }

    /// Returns the key `direction` accepts, inserting `make(seed)` first if absent.
    ///
    /// `direction` sees the comparator, the seed and each visited key, so adapters
    /// can search by part of `T` and build the full value only on a miss.
    pub(crate) fn get_or_insert_with<S, D, F>(&mut self, seed: S, mut direction: D, make: F) -> &mut T
    where
        D: FnMut(&C, &S, &T) -> Ordering,
        F: FnOnce(S) -> T,
    {
        let found = self.search_by(|key| direction(&self.comparator, &seed, key));
        let node = match found {
            Ok(node) => node,
            Err((parent, side)) => self.attach(parent, side),
        };
        // Live nodes already hold a key, so `make` only runs for the new node.
        self.arena[node].key.get_or_insert_with(|| make(seed))
    }
}

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the cursor of `key`, or [`end`](Self::end) if absent.
    pub fn find(&self, key: &T) -> Cursor {
        self.locate_by(|candidate| self.comparator.compare(key, candidate))
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        !self.find(key).is_end()
    }

    /// Returns the stored key equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.get_at(self.find(key))
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `key` unless an equal key is present.
    ///
    /// Returns the cursor of the stored key and whether a node was created.
    /// On a duplicate the tree is left untouched and `key` is dropped.
    pub fn insert(&mut self, key: T) -> (Cursor, bool) {
        let found = self.search_by(|existing| self.comparator.compare(&key, existing));
        match found {
            Ok(node) => (self.cursor_at(node), false),
            Err((parent, side)) => {
                let node = self.attach(parent, side);
                self.arena[node].key = Some(key);
                (self.cursor_at(node), true)
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C: Default> Default for RedBlackTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for RedBlackTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for RedBlackTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for RedBlackTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq, C> PartialEq for RedBlackTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for RedBlackTree<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for RedBlackTree<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}
