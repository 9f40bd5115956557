//! Rotations and the insert/delete fixups.
//!
//! Every parent/child edge in the tree is written through [`RedBlackTree::link`],
//! which keeps the cached `is_left_child` flag in step with the pointers.
//! Fixups are written once for a generic [`Side`] instead of as mirrored
//! left/right copies.

use super::RedBlackTree;
use super::node::{Color, NIL, NodeId, Side};

impl<T, C> RedBlackTree<T, C> {
    /// Makes `child` the `side` child of `parent`.
    ///
    /// A sentinel `parent` means `child` becomes the root; a sentinel `child`
    /// empties the slot. The sentinel's own fields are never written here,
    /// since they hold the min/max cache.
    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId, side: Side) {
        if parent.is_nil() {
            self.root = child;
            if !child.is_nil() {
                let node = &mut self.arena[child];
                node.parent = NIL;
                node.is_left_child = false;
            }
            return;
        }
        self.arena[parent].set_child(side, child);
        if !child.is_nil() {
            let node = &mut self.arena[child];
            node.parent = parent;
            node.is_left_child = side == Side::Left;
        }
    }

    /// Rotates `node` down toward `direction`; its opposite child takes its place.
    pub(crate) fn rotate(&mut self, node: NodeId, direction: Side) {
        let pivot = self.arena[node].child(direction.opposite());
        debug_assert!(!pivot.is_nil(), "rotation pivot must be a live node");
        let inner = self.arena[pivot].child(direction);
        let parent = self.arena[node].parent;
        let side = self.arena[node].side();

        self.link(node, inner, direction.opposite());
        self.link(parent, pivot, side);
        self.link(pivot, node, direction);
    }

    /// Restores the red-black invariants after `node` was attached as a red leaf.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        while self.is_red(self.arena[node].parent) {
            let mut parent = self.arena[node].parent;
            // A red parent is never the root, so the grandparent is live.
            let grandparent = self.arena[parent].parent;
            let parent_side = self.arena[parent].side();
            let uncle = self.arena[grandparent].child(parent_side.opposite());

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.arena[node].side() != parent_side {
                self.rotate(parent, parent_side);
                node = parent;
                parent = self.arena[node].parent;
            }

            self.rotate(grandparent, parent_side.opposite());
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            break;
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Resolves the missing black of `node`, a black node about to be detached.
    ///
    /// `node` stays in place while the loop runs; only its ancestors and their
    /// other subtrees are restructured.
    ///
    /// A red sibling is first rotated above the parent, which leaves a red
    /// parent and a black sibling. From there two black nephews recolor and
    /// either stop (red parent) or ascend (black parent). A red near nephew
    /// with a black far one is rotated to the far side, and a red far nephew
    /// always finishes with one rotation at the parent.
    pub(crate) fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.is_black(node) {
            let parent = self.arena[node].parent;
            let side = self.arena[node].side();
            let mut sibling = self.arena[parent].child(side.opposite());

            // Red sibling (black parent): rotate so the node gets a black sibling.
            if self.is_red(sibling) {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.arena[parent].child(side.opposite());
            }

            let near = self.arena[sibling].child(side);
            let far = self.arena[sibling].child(side.opposite());

            if self.is_black(near) && self.is_black(far) {
                self.set_color(sibling, Color::Red);
                if self.is_red(parent) {
                    self.set_color(parent, Color::Black);
                    break;
                }
                // Only case that propagates: the whole parent subtree lost a black.
                node = parent;
                continue;
            }

            // Red near nephew only: turn it into the far one.
            if self.is_black(far) {
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.arena[parent].child(side.opposite());
            }

            // Red far nephew: terminal.
            let far = self.arena[sibling].child(side.opposite());
            let parent_color = self.arena[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            break;
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.arena[id].color == Color::Red
    }

    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.arena[id].color == Color::Black
    }

    /// Writes a color; the sentinel stays black no matter what is asked.
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if !id.is_nil() {
            self.arena[id].color = color;
        }
    }
}
