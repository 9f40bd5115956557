//! Node storage for [`RedBlackTree`](super::RedBlackTree).
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! [`NodeId`] handles. Slot 0 is the sentinel: it is always black, it never
//! carries a key, and its `left`/`right` fields cache the minimum and maximum
//! live nodes instead of pointing at children.

use std::ops::{Index, IndexMut};

/// Handle of a node slot inside a tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

/// The sentinel slot, shared by every leaf edge of the tree.
pub(crate) const NIL: NodeId = NodeId(0);

impl NodeId {
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == NIL.0
    }
}

/// The color of a red-black tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node; both of its children are black.
    Red,
    /// A black node; counted by the black-height.
    Black,
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// `None` for the sentinel, vacant slots and a node still being attached.
    pub(crate) key: Option<T>,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    /// Cached relation to `parent`; only [`link`](super::RedBlackTree::link) writes it.
    pub(crate) is_left_child: bool,
    /// Allocation stamp, unique within one arena; zero for the sentinel and vacant slots.
    pub(crate) generation: u64,
}

impl<T> Node<T> {
    const fn vacant() -> Self {
        Self {
            key: None,
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
            is_left_child: false,
            generation: 0,
        }
    }

    const fn new_red(generation: u64) -> Self {
        Self {
            key: None,
            color: Color::Red,
            parent: NIL,
            left: NIL,
            right: NIL,
            is_left_child: false,
            generation,
        }
    }

    pub(crate) const fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: NodeId) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) const fn side(&self) -> Side {
        if self.is_left_child {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Slot storage with recycling of released nodes.
///
/// Every allocation takes a fresh stamp from `stamp`, which only grows, so a
/// handle that remembers the stamp can tell a recycled slot from its own node.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<NodeId>,
    stamp: u64,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::vacant()],
            vacant: Vec::new(),
            stamp: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::vacant());
        Self {
            nodes,
            vacant: Vec::new(),
            stamp: 0,
        }
    }

    /// Stores `key` in a fresh red node whose links all point at the sentinel.
    pub(crate) fn allocate(&mut self, key: T) -> NodeId {
        let id = self.allocate_slot();
        self.nodes[id.0].key = Some(key);
        id
    }

    /// Claims a fresh red node with a new stamp and no key yet.
    pub(crate) fn allocate_slot(&mut self) -> NodeId {
        self.stamp += 1;
        let node = Node::new_red(self.stamp);
        if let Some(id) = self.vacant.pop() {
            self.nodes[id.0] = node;
            id
        } else {
            self.nodes.push(node);
            NodeId(self.nodes.len() - 1)
        }
    }

    /// Resets the slot to its default state and hands back the key.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<T> {
        if id.is_nil() {
            return None;
        }
        let key = std::mem::replace(&mut self.nodes[id.0], Node::vacant()).key;
        if key.is_some() {
            self.vacant.push(id);
        }
        key
    }

    /// Drops every node and resets the sentinel cache.
    ///
    /// The stamp is kept, so handles from before the reset never match again.
    pub(crate) fn reset(&mut self) {
        self.nodes.truncate(1);
        self.nodes[NIL.0] = Node::vacant();
        self.vacant.clear();
    }

    pub(crate) fn key(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0).and_then(|node| node.key.as_ref())
    }

    pub(crate) fn key_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).and_then(|node| node.key.as_mut())
    }

    pub(crate) fn take_key(&mut self, id: NodeId) -> Option<T> {
        self.nodes.get_mut(id.0).and_then(|node| node.key.take())
    }

    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        self.key(id).is_some()
    }

    /// Returns `true` if `id` holds the node allocated with `generation`.
    pub(crate) fn is_current(&self, id: NodeId, generation: u64) -> bool {
        self.nodes
            .get(id.0)
            .is_some_and(|node| node.key.is_some() && node.generation == generation)
    }

    #[cfg(test)]
    pub(crate) const fn slot_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_arena_holds_black_sentinel() {
        let arena: Arena<i32> = Arena::new();
        assert_eq!(arena[NIL].color, Color::Black);
        assert!(!arena.is_live(NIL));
        assert_eq!(arena.slot_count(), 1);
    }

    #[rstest]
    fn test_allocate_creates_red_node_linked_to_sentinel() {
        let mut arena = Arena::new();
        let id = arena.allocate(7);
        assert_eq!(arena[id].color, Color::Red);
        assert_eq!(arena[id].left, NIL);
        assert_eq!(arena[id].right, NIL);
        assert_eq!(arena.key(id), Some(&7));
    }

    #[rstest]
    fn test_release_recycles_slot() {
        let mut arena = Arena::new();
        let first = arena.allocate(1);
        assert_eq!(arena.release(first), Some(1));
        assert!(!arena.is_live(first));
        let second = arena.allocate(2);
        assert_eq!(first, second);
        assert_eq!(arena.slot_count(), 2);
    }

    #[rstest]
    fn test_recycled_slot_gets_new_generation() {
        let mut arena = Arena::new();
        let first = arena.allocate(1);
        let stamp = arena[first].generation;
        arena.release(first);
        let second = arena.allocate(2);
        assert_eq!(first, second);
        assert!(!arena.is_current(second, stamp));
        assert!(arena.is_current(second, arena[second].generation));
    }

    #[rstest]
    fn test_reset_keeps_stamps_unique() {
        let mut arena = Arena::new();
        let before = arena.allocate(1);
        let stamp = arena[before].generation;
        arena.reset();
        let after = arena.allocate(2);
        assert_eq!(before, after);
        assert_ne!(arena[after].generation, stamp);
    }

    #[rstest]
    fn test_release_of_sentinel_is_ignored() {
        let mut arena: Arena<i32> = Arena::new();
        assert_eq!(arena.release(NIL), None);
        let id = arena.allocate(3);
        assert_ne!(id, NIL);
    }

    #[rstest]
    fn test_double_release_does_not_duplicate_vacancy() {
        let mut arena = Arena::new();
        let id = arena.allocate(1);
        arena.release(id);
        assert_eq!(arena.release(id), None);
        let first = arena.allocate(2);
        let second = arena.allocate(3);
        assert_ne!(first, second);
    }

    #[rstest]
    #[case(Side::Left, Side::Right)]
    #[case(Side::Right, Side::Left)]
    fn test_side_opposite(#[case] side: Side, #[case] expected: Side) {
        assert_eq!(side.opposite(), expected);
    }
}
