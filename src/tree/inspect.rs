//! Read-only views of the node graph.
//!
//! These views expose colors and links so that invariant checkers and
//! debugging tools can walk the tree structure without access to its internals.
//!
//! # Examples
//!
//! ```rust
//! use rbkit::tree::RedBlackTree;
//! use rbkit::tree::inspect::NodeView;
//!
//! fn black_height<T, C>(view: Option<NodeView<'_, T, C>>) -> usize {
//!     match view {
//!         None => 1,
//!         Some(node) => black_height(node.left()) + usize::from(node.is_black()),
//!     }
//! }
//!
//! let tree: RedBlackTree<i32> = (0..15).collect();
//! assert!(black_height(tree.root_view()) >= 3);
//! ```

use super::node::{Color, NIL, NodeId};
use super::{Cursor, RedBlackTree};

/// A borrowed view of one live node.
pub struct NodeView<'a, T, C> {
    tree: &'a RedBlackTree<T, C>,
    node: NodeId,
}

impl<T, C> Clone for NodeView<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for NodeView<'_, T, C> {}

impl<'a, T, C> NodeView<'a, T, C> {
    fn wrap(tree: &'a RedBlackTree<T, C>, node: NodeId) -> Option<Self> {
        tree.arena.is_live(node).then_some(Self { tree, node })
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> Option<&'a T> {
        self.tree.arena.key(self.node)
    }

    /// Returns the node's color.
    pub fn color(&self) -> Color {
        self.tree.arena[self.node].color
    }

    /// Returns `true` if the node is black.
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns the left child, `None` at a sentinel edge.
    pub fn left(&self) -> Option<Self> {
        Self::wrap(self.tree, self.tree.arena[self.node].left)
    }

    /// Returns the right child, `None` at a sentinel edge.
    pub fn right(&self) -> Option<Self> {
        Self::wrap(self.tree, self.tree.arena[self.node].right)
    }

    /// Returns the parent, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        Self::wrap(self.tree, self.tree.arena[self.node].parent)
    }

    /// Returns the cached "is the left child of its parent" flag.
    pub fn is_left_child(&self) -> bool {
        self.tree.arena[self.node].is_left_child
    }

    /// Returns the cursor addressing this node.
    pub fn cursor(&self) -> Cursor {
        self.tree.cursor_at(self.node)
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Returns a view of the root, or `None` if the tree is empty.
    pub fn root_view(&self) -> Option<NodeView<'_, T, C>> {
        NodeView::wrap(self, self.root)
    }

    /// Returns a view of the node at `cursor`.
    pub fn view_at(&self, cursor: Cursor) -> Option<NodeView<'_, T, C>> {
        NodeView::wrap(self, self.resolve(cursor)?)
    }

    /// Returns the sentinel's color; it must always be black.
    pub fn sentinel_color(&self) -> Color {
        self.arena[NIL].color
    }
}
