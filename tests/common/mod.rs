//! Red-black invariant checker shared by the integration tests.
//!
//! Walks the tree through the read-only inspection views only, so it does not
//! rely on any of the tree's own bookkeeping.

#![allow(dead_code)]

use rbkit::compare::Comparator;
use rbkit::tree::inspect::NodeView;
use rbkit::tree::{Color, RedBlackTree};

/// Describes the first invariant found broken.
#[derive(Debug, PartialEq, Eq)]
pub enum Violation {
    SentinelNotBlack,
    RootNotBlack,
    RootHasParent,
    RedRed,
    BlackHeightMismatch { left: usize, right: usize },
    ParentLinkBroken,
    LeftChildFlagBroken,
    OrderBroken,
    LengthMismatch { counted: usize, reported: usize },
    CachedBoundsBroken,
}

struct Summary {
    black_height: usize,
    count: usize,
}

fn walk<T, C: Comparator<T>>(
    tree: &RedBlackTree<T, C>,
    node: Option<NodeView<'_, T, C>>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> Result<Summary, Violation> {
    let Some(node) = node else {
        return Ok(Summary {
            black_height: 1,
            count: 0,
        });
    };
    let key = node.key().ok_or(Violation::ParentLinkBroken)?;
    let order = tree.comparator();
    if lower.is_some_and(|bound| !order.less(bound, key))
        || upper.is_some_and(|bound| !order.less(key, bound))
    {
        return Err(Violation::OrderBroken);
    }

    for (child, is_left) in [(node.left(), true), (node.right(), false)] {
        if let Some(child) = child {
            if child.parent().map(|parent| parent.cursor()) != Some(node.cursor()) {
                return Err(Violation::ParentLinkBroken);
            }
            if child.is_left_child() != is_left {
                return Err(Violation::LeftChildFlagBroken);
            }
            if node.color() == Color::Red && child.color() == Color::Red {
                return Err(Violation::RedRed);
            }
        }
    }

    let left = walk(tree, node.left(), lower, Some(key))?;
    let right = walk(tree, node.right(), Some(key), upper)?;
    if left.black_height != right.black_height {
        return Err(Violation::BlackHeightMismatch {
            left: left.black_height,
            right: right.black_height,
        });
    }
    Ok(Summary {
        black_height: left.black_height + usize::from(node.is_black()),
        count: left.count + right.count + 1,
    })
}

fn extreme<'a, T, C>(
    mut node: NodeView<'a, T, C>,
    step: fn(&NodeView<'a, T, C>) -> Option<NodeView<'a, T, C>>,
) -> NodeView<'a, T, C> {
    while let Some(next) = step(&node) {
        node = next;
    }
    node
}

/// Verifies every red-black invariant and returns the black-height of the root.
pub fn check_invariants<T, C: Comparator<T>>(tree: &RedBlackTree<T, C>) -> Result<usize, Violation> {
    if tree.sentinel_color() != Color::Black {
        return Err(Violation::SentinelNotBlack);
    }
    let root = tree.root_view();
    if let Some(root) = root {
        if root.color() != Color::Black {
            return Err(Violation::RootNotBlack);
        }
        if root.parent().is_some() {
            return Err(Violation::RootHasParent);
        }
        let leftmost = extreme(root, NodeView::left);
        let rightmost = extreme(root, NodeView::right);
        if tree.begin() != leftmost.cursor() || tree.last() != rightmost.cursor() {
            return Err(Violation::CachedBoundsBroken);
        }
    } else if tree.begin() != tree.end() || tree.last() != tree.end() {
        return Err(Violation::CachedBoundsBroken);
    }

    let summary = walk(tree, root, None, None)?;
    if summary.count != tree.len() {
        return Err(Violation::LengthMismatch {
            counted: summary.count,
            reported: tree.len(),
        });
    }
    Ok(summary.black_height)
}

/// Panics with the violation if the tree is not a valid red-black tree.
pub fn assert_valid<T, C: Comparator<T>>(tree: &RedBlackTree<T, C>) -> usize {
    match check_invariants(tree) {
        Ok(black_height) => black_height,
        Err(violation) => panic!("red-black invariant violated: {violation:?}"),
    }
}

/// Collects the keys in iteration order.
pub fn keys<T: Clone, C>(tree: &RedBlackTree<T, C>) -> Vec<T> {
    tree.iter().cloned().collect()
}
