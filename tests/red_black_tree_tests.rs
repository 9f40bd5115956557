//! Unit tests for RedBlackTree.
//!
//! Every mutation in these tests is followed by a full invariant check
//! through the independent checker in `common`.

mod common;

use common::{assert_valid, keys};
use rbkit::compare::Reverse;
use rbkit::tree::RedBlackTree;
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

/// Forty-one keys whose insertion order exercises every deletion shape.
const ERASE_FIXTURE_KEYS: [i32; 41] = [
    20, 25, 10, 4, 16, 23, 30, 14, 17, 19, 12, 15, 11, 2, 5, 3, 35, 40, 45, 50, 55, 60, 65, 70,
    75, 80, 85, 90, 95, 100, 105, 110, 115, 120, 125, 130, 135, 140, 145, 150, 155,
];

#[fixture]
fn erase_fixture() -> RedBlackTree<i32> {
    let tree: RedBlackTree<i32> = ERASE_FIXTURE_KEYS.into_iter().collect();
    assert_valid(&tree);
    tree
}

fn sorted_fixture_without(removed: &[i32]) -> Vec<i32> {
    let mut expected: Vec<i32> = ERASE_FIXTURE_KEYS
        .into_iter()
        .filter(|key| !removed.contains(key))
        .collect();
    expected.sort_unstable();
    expected
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_find_on_empty_tree_returns_end() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert_eq!(tree.find(&1), tree.end());
    assert_eq!(tree.begin(), tree.end());
    assert!(!tree.contains(&1));
    assert_valid(&tree);
}

#[rstest]
fn test_find_returns_cursor_of_key() {
    let tree: RedBlackTree<i32> = (0..100).step_by(7).collect();
    for key in (0..100).step_by(7) {
        assert_eq!(tree.get_at(tree.find(&key)), Some(&key));
    }
    assert_eq!(tree.find(&8), tree.end());
}

// =============================================================================
// Insertion Tests
// =============================================================================

#[rstest]
fn test_ascending_insert_stays_balanced() {
    let mut tree = RedBlackTree::new();
    for key in 1..=10 {
        tree.insert(key);
        assert_valid(&tree);
    }
    // ceil(log2(n + 1)) + 1 for n = 10
    let black_height = assert_valid(&tree);
    assert!(black_height <= 5, "black height {black_height}");
    assert_eq!(keys(&tree), (1..=10).collect::<Vec<_>>());
}

#[rstest]
#[case::ascending((0..500).collect())]
#[case::descending((0..500).rev().collect())]
#[case::interleaved((0..250).flat_map(|key| [key, 499 - key]).collect())]
fn test_insert_orders_stay_valid(#[case] order: Vec<i32>) {
    let mut tree = RedBlackTree::new();
    for key in order {
        assert!(tree.insert(key).1);
    }
    assert_valid(&tree);
    assert_eq!(tree.len(), 500);
    assert_eq!(keys(&tree), (0..500).collect::<Vec<_>>());
}

#[rstest]
fn test_duplicate_insert_leaves_tree_unchanged() {
    let mut tree: RedBlackTree<i32> = (0..20).collect();
    let before = tree.clone();
    let existing = tree.find(&7);
    let (cursor, inserted) = tree.insert(7);
    assert!(!inserted);
    assert_eq!(cursor, existing);
    assert_eq!(tree, before);
    assert_eq!(tree.len(), 20);
}

#[rstest]
fn test_insert_does_not_invalidate_cursors() {
    let mut tree = RedBlackTree::new();
    let (cursor, _) = tree.insert(50);
    for key in 0..100 {
        tree.insert(key);
    }
    assert_eq!(tree.get_at(cursor), Some(&50));
    assert_eq!(tree.get_at(tree.next(cursor)), Some(&51));
}

// =============================================================================
// Deletion Tests
// =============================================================================

#[rstest]
fn test_erase_node_with_two_children() {
    let mut tree: RedBlackTree<i32> = [20, 10, 30].into_iter().collect();
    tree.erase(tree.find(&20));
    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![10, 30]);
}

#[rstest]
fn test_erase_in_sequence() {
    let mut tree: RedBlackTree<i32> = (1..=5).collect();
    for key in 1..=3 {
        tree.erase(tree.find(&key));
        assert_valid(&tree);
        assert!(!tree.contains(&key));
    }
    assert_eq!(keys(&tree), vec![4, 5]);
}

#[rstest]
fn test_erase_middle_of_five() {
    let mut tree: RedBlackTree<i32> = [3, 1, 2, 4, 5].into_iter().collect();
    let third = tree.next(tree.next(tree.begin()));
    assert_eq!(tree.get_at(third), Some(&3));
    tree.erase(third);
    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![1, 2, 4, 5]);
}

#[rstest]
#[case::inner_node_30(30)]
#[case::inner_node_15(15)]
#[case::upper_node_140(140)]
#[case::upper_node_130(130)]
#[case::root(20)]
#[case::minimum(2)]
#[case::maximum(155)]
fn test_erase_fixture_key(mut erase_fixture: RedBlackTree<i32>, #[case] key: i32) {
    erase_fixture.erase(erase_fixture.find(&key));
    assert_valid(&erase_fixture);
    assert!(!erase_fixture.contains(&key));
    assert_eq!(keys(&erase_fixture), sorted_fixture_without(&[key]));
}

#[rstest]
fn test_erase_after_extra_insert(mut erase_fixture: RedBlackTree<i32>) {
    erase_fixture.insert(142);
    erase_fixture.erase(erase_fixture.find(&130));
    assert_valid(&erase_fixture);
    assert!(!erase_fixture.contains(&130));
    assert!(erase_fixture.contains(&142));
}

#[rstest]
fn test_erase_two_in_a_row(mut erase_fixture: RedBlackTree<i32>) {
    erase_fixture.erase(erase_fixture.find(&11));
    assert_valid(&erase_fixture);
    erase_fixture.erase(erase_fixture.find(&15));
    assert_valid(&erase_fixture);
    assert_eq!(keys(&erase_fixture), sorted_fixture_without(&[11, 15]));
}

#[rstest]
fn test_erase_neighbours_through_cursors(mut erase_fixture: RedBlackTree<i32>) {
    let thirty = erase_fixture.find(&30);
    let twenty_three = erase_fixture.prev(erase_fixture.prev(thirty));
    assert_eq!(erase_fixture.get_at(twenty_three), Some(&23));

    erase_fixture.erase(thirty);
    assert_valid(&erase_fixture);
    let twenty_five = erase_fixture.next(twenty_three);
    erase_fixture.erase(twenty_three);
    assert_valid(&erase_fixture);
    erase_fixture.erase(twenty_five);
    assert_valid(&erase_fixture);

    assert!(!erase_fixture.contains(&25));
    assert_eq!(keys(&erase_fixture), sorted_fixture_without(&[23, 25, 30]));
}

#[rstest]
fn test_erase_every_fixture_key(mut erase_fixture: RedBlackTree<i32>) {
    for key in ERASE_FIXTURE_KEYS {
        erase_fixture.erase(erase_fixture.find(&key));
        assert_valid(&erase_fixture);
    }
    assert!(erase_fixture.is_empty());
    assert_eq!(erase_fixture.begin(), erase_fixture.end());
}

#[rstest]
fn test_erase_keeps_unrelated_cursors() {
    let mut tree = RedBlackTree::new();
    let cursors: Vec<_> = (0..64).map(|key| tree.insert(key).0).collect();
    for key in (0..64).filter(|key| key % 3 == 0) {
        tree.erase(cursors[usize::try_from(key).unwrap()]);
    }
    assert_valid(&tree);
    for (key, cursor) in (0..64).zip(&cursors) {
        if key % 3 == 0 {
            assert_eq!(tree.get_at(*cursor), None);
        } else {
            assert_eq!(tree.get_at(*cursor), Some(&key));
        }
    }
}

#[rstest]
fn test_erase_stale_cursor_is_noop() {
    let mut tree: RedBlackTree<i32> = (0..8).collect();
    let cursor = tree.find(&4);
    tree.erase(cursor);
    tree.erase(cursor);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.next(cursor), tree.end());
    assert_valid(&tree);
}

#[rstest]
fn test_stale_cursor_does_not_alias_reused_slot() {
    let mut tree: RedBlackTree<i32> = (1..=5).collect();
    let stale = tree.find(&1);
    tree.erase(stale);
    tree.insert(99);

    assert_eq!(tree.get_at(stale), None);
    assert!(tree.view_at(stale).is_none());
    tree.erase(stale);
    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![2, 3, 4, 5, 99]);
}

#[rstest]
fn test_stale_cursor_after_clear_does_not_resolve() {
    let mut tree: RedBlackTree<i32> = (1..=3).collect();
    let stale = tree.find(&2);
    tree.clear();
    tree.extend([7, 8, 9]);

    assert_eq!(tree.get_at(stale), None);
    tree.erase(stale);
    assert_eq!(keys(&tree), vec![7, 8, 9]);
}

#[rstest]
fn test_erase_two_children_falls_back_to_predecessor() {
    // Successor 30 has a right child, so 10 takes the erased node's place.
    let mut tree: RedBlackTree<i32> = [20, 10, 30, 40].into_iter().collect();
    let ten = tree.find(&10);
    let thirty = tree.find(&30);
    let forty = tree.find(&40);

    tree.erase(tree.find(&20));

    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![10, 30, 40]);
    assert_eq!(tree.get_at(ten), Some(&10));
    assert_eq!(tree.get_at(thirty), Some(&30));
    assert_eq!(tree.get_at(forty), Some(&40));
    assert_eq!(tree.begin(), ten);
    assert_eq!(tree.last(), forty);
}

#[rstest]
fn test_erase_two_children_uses_leaf_successor() {
    let mut tree: RedBlackTree<i32> = [20, 10, 30, 25].into_iter().collect();
    let twenty_five = tree.find(&25);

    tree.erase(tree.find(&20));

    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![10, 25, 30]);
    assert_eq!(tree.get_at(twenty_five), Some(&25));
}

// =============================================================================
// Bulk Operation Tests
// =============================================================================

#[rstest]
fn test_merge_moves_only_missing_keys() {
    let mut left: RedBlackTree<i32> = [1, 3, 5].into_iter().collect();
    let mut right: RedBlackTree<i32> = [3, 4, 6].into_iter().collect();
    left.merge(&mut right);
    assert_valid(&left);
    assert_valid(&right);
    assert_eq!(keys(&left), vec![1, 3, 4, 5, 6]);
    assert_eq!(keys(&right), vec![3]);
}

#[rstest]
fn test_swap_exchanges_comparators_too() {
    let mut natural: RedBlackTree<i32> = (0..3).collect();
    let mut other: RedBlackTree<i32> = (10..12).collect();
    natural.swap(&mut other);
    assert_eq!(keys(&natural), vec![10, 11]);
    assert_eq!(keys(&other), vec![0, 1, 2]);
    natural.insert(5);
    assert_valid(&natural);
}

#[rstest]
fn test_clone_is_valid_and_equal() {
    let tree: RedBlackTree<i32, Reverse> = (0..300).collect();
    let copy = tree.clone();
    assert_valid(&copy);
    assert_eq!(copy, tree);
    assert_eq!(assert_valid(&copy), assert_valid(&tree));
}

#[rstest]
fn test_clear_then_reuse() {
    let mut tree: RedBlackTree<i32> = (0..50).collect();
    tree.clear();
    assert_valid(&tree);
    tree.extend([3, 1, 2]);
    assert_valid(&tree);
    assert_eq!(keys(&tree), vec![1, 2, 3]);
}
