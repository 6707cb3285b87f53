// SortedTree tests
// Ordering, upsert, the three removal cases, and degenerate shapes.

use std::cmp::Ordering;

use inventory_store::collections::SortedTree;

fn int_tree() -> SortedTree<i32, fn(&i32, &i32) -> Ordering> {
    SortedTree::new(i32::cmp as fn(&i32, &i32) -> Ordering)
}

fn contents<C: Fn(&i32, &i32) -> Ordering>(tree: &SortedTree<i32, C>) -> Vec<i32> {
    let mut out = Vec::new();
    tree.in_order_traversal(|item| out.push(*item));
    out
}

/// A payload ordered by its key only.
type Keyed = (u32, &'static str);

fn by_key(a: &Keyed, b: &Keyed) -> Ordering {
    a.0.cmp(&b.0)
}

fn keyed_tree() -> SortedTree<Keyed, fn(&Keyed, &Keyed) -> Ordering> {
    SortedTree::new(by_key as fn(&Keyed, &Keyed) -> Ordering)
}

// =============================================================================
// Test 1: In-order traversal is sorted
// =============================================================================
#[test]
fn traversal_is_sorted() {
    let mut tree = int_tree();
    for key in [5, 3, 8, 1, 4] {
        assert!(tree.insert(key).is_none());
    }
    assert_eq!(contents(&tree), [1, 3, 4, 5, 8]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&8));
}

// =============================================================================
// Test 2: Inserting an equal key replaces the payload, size unchanged
// =============================================================================
#[test]
fn equal_key_is_upsert() {
    let mut tree = keyed_tree();
    tree.insert((1, "first"));
    tree.insert((2, "second"));

    let replaced = tree.insert((1, "again"));
    assert_eq!(replaced, Some((1, "first")));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.find(&(1, "")), Some(&(1, "again")));
}

// =============================================================================
// Test 3: find and contains
// =============================================================================
#[test]
fn find_present_and_absent() {
    let mut tree = int_tree();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(key);
    }
    assert_eq!(tree.find(&60), Some(&60));
    assert!(tree.contains(&20));
    assert!(!tree.contains(&65));
    assert_eq!(tree.find(&0), None);
}

// =============================================================================
// Test 4: Remove a leaf
// =============================================================================
#[test]
fn remove_leaf() {
    let mut tree = int_tree();
    for key in [5, 3, 8, 1, 4] {
        tree.insert(key);
    }
    assert_eq!(tree.remove(&1), Some(1));
    assert_eq!(contents(&tree), [3, 4, 5, 8]);
    assert_eq!(tree.len(), 4);
}

// =============================================================================
// Test 5: Remove a node with one child
// =============================================================================
#[test]
fn remove_node_with_one_child() {
    let mut tree = int_tree();
    for key in [5, 3, 8, 9] {
        tree.insert(key);
    }
    assert_eq!(tree.remove(&8), Some(8));
    assert_eq!(contents(&tree), [3, 5, 9]);
    assert!(tree.contains(&9));
}

// =============================================================================
// Test 6: Remove a node with two children, including the root
// =============================================================================
#[test]
fn remove_node_with_two_children() {
    let mut tree = int_tree();
    for key in [5, 3, 8, 1, 4, 7, 9, 6] {
        tree.insert(key);
    }
    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(contents(&tree), [1, 4, 5, 6, 7, 8, 9]);

    assert_eq!(tree.remove(&5), Some(5));
    assert_eq!(contents(&tree), [1, 4, 6, 7, 8, 9]);
    assert_eq!(tree.len(), 6);

    assert_eq!(tree.remove(&6), Some(6));
    assert_eq!(contents(&tree), [1, 4, 7, 8, 9]);
}

// =============================================================================
// Test 7: Removing a missing key changes nothing
// =============================================================================
#[test]
fn remove_missing_key() {
    let mut tree = int_tree();
    assert_eq!(tree.remove(&1), None);

    tree.insert(2);
    assert_eq!(tree.remove(&3), None);
    assert_eq!(tree.len(), 1);
}

// =============================================================================
// Test 8: Removal returns the stored payload, not the probe
// =============================================================================
#[test]
fn remove_returns_stored_payload() {
    let mut tree = keyed_tree();
    tree.insert((10, "ten"));
    tree.insert((5, "five"));
    tree.insert((15, "fifteen"));

    assert_eq!(tree.remove(&(10, "")), Some((10, "ten")));
    let keys: Vec<u32> = tree.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, [5, 15]);
}

// =============================================================================
// Test 9: Sorted inserts build a chain; it still works and drops cleanly
// =============================================================================
#[test]
fn sorted_inserts_degenerate_to_chain() {
    let mut tree = int_tree();
    let n = 10_000;
    for key in 0..n {
        tree.insert(key);
    }
    assert_eq!(tree.len(), n as usize);
    assert_eq!(tree.height(), n as usize);
    assert!(tree.contains(&(n - 1)));
    assert_eq!(tree.iter().len(), n as usize);
    assert_eq!(tree.remove(&0), Some(0));
    assert_eq!(tree.min(), Some(&1));
}

// =============================================================================
// Test 10: clear empties the tree
// =============================================================================
#[test]
fn clear_then_reuse() {
    let mut tree = int_tree();
    for key in [3, 1, 2] {
        tree.insert(key);
    }
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.min(), None);

    tree.insert(9);
    assert_eq!(contents(&tree), [9]);
}

// =============================================================================
// Test 11: Insert/remove laws against a reference set
// =============================================================================
#[test]
fn matches_reference_set() {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    let mut rng = StdRng::seed_from_u64(7);
    let mut tree = int_tree();
    let mut reference = BTreeSet::new();

    for _ in 0..5_000 {
        let key = rng.gen_range(0..500);
        if rng.gen_bool(0.6) {
            assert_eq!(tree.insert(key).is_none(), reference.insert(key));
        } else {
            assert_eq!(tree.remove(&key).is_some(), reference.remove(&key));
        }
    }
    assert_eq!(tree.len(), reference.len());
    assert_eq!(contents(&tree), reference.into_iter().collect::<Vec<_>>());
}
