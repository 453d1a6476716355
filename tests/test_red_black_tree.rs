extern crate arena_rbtree;
extern crate rand;

use arena_rbtree::{Color, RedBlackTree};
use rand::Rng;
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 10_000;

fn black_heights_are_uniform(tree: &RedBlackTree<u32>) -> bool {
    let heights = tree.leaf_black_heights();
    heights.iter().all(|height| *height == heights[0])
}

#[test]
fn int_test_black_height_sample() {
    let tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);

    assert_eq!(tree.root().map(|node| node.color()), Some(Color::Black));
    assert!(black_heights_are_uniform(&tree));

    let mut heights = tree.leaf_black_heights();
    heights.sort();
    heights.dedup();
    assert_eq!(heights.len(), 1);

    for node in tree.nodes().filter(|node| node.is_red()) {
        assert!(node.left().map_or(true, |child| child.is_black()));
        assert!(node.right().map_or(true, |child| child.is_black()));
    }
}

#[test]
fn int_test_delete_scenario() {
    let mut tree = RedBlackTree::from_values(1..=7);
    assert!(tree.contains(&2));
    assert_eq!(tree.remove(&2), Ok(Some(2)));
    assert!(!tree.contains(&2));
    assert!(tree.root().unwrap().is_black());
    assert!(tree.validate().is_ok());

    assert!(tree.contains(&3));
    assert!(tree.contains(&6));
    assert_eq!(tree.remove_all(&[3, 6]), Ok(2));
    assert!(!tree.contains(&3));
    assert!(!tree.contains(&6));
    assert!(tree.root().unwrap().is_black());
    assert!(tree.validate().is_ok());
    assert_eq!(tree.len(), 4);
}

#[test]
fn int_test_delete_leaf() {
    let mut tree = RedBlackTree::from_values(1..=7);
    assert_eq!(tree.remove(&1), Ok(Some(1)));
    assert!(!tree.contains(&1));
    assert!(tree.validate().is_ok());
}

#[test]
fn int_test_random_operations() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RedBlackTree::new();
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0, 1_000);
        if rng.gen_weighted_bool(3) {
            let removed = tree.remove(&value).unwrap();
            match expected.binary_search(&value) {
                Ok(index) => {
                    expected.remove(index);
                    assert_eq!(removed, Some(value));
                },
                Err(_) => assert_eq!(removed, None),
            }
        } else {
            tree.add(value);
            let index = match expected.binary_search(&value) {
                Ok(index) | Err(index) => index,
            };
            expected.insert(index, value);
            assert!(tree.contains(&value));
        }

        assert!(tree.validate().is_ok());
        assert_eq!(tree.len(), expected.len());
    }

    assert!(black_heights_are_uniform(&tree));
    assert_eq!(tree.iter().count(), expected.len());
    assert_eq!(tree.min(), expected.first());
    assert_eq!(tree.max(), expected.last());
    assert_eq!(
        tree.in_order().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    rng.shuffle(&mut expected);
    let mut expected_len = expected.len();
    for value in expected {
        assert_eq!(tree.remove(&value), Ok(Some(value)));
        expected_len -= 1;
        assert_eq!(tree.len(), expected_len);
        assert!(tree.validate().is_ok());
    }

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
}

#[test]
fn int_test_sequential_operations() {
    let mut tree = RedBlackTree::new();
    for value in 0..1_000u32 {
        tree.add(value);
        assert!(tree.validate().is_ok());
    }

    // a subtree of black height b holds at least 2^b - 1 values
    let height = tree.validate().unwrap();
    assert!(height <= 10);

    for value in (0..1_000u32).filter(|value| value % 2 == 0) {
        assert_eq!(tree.remove(&value), Ok(Some(value)));
        assert!(tree.validate().is_ok());
    }
    assert_eq!(tree.len(), 500);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&999));

    for value in (0..1_000u32).rev() {
        assert_eq!(tree.remove(&value).unwrap().is_some(), value % 2 == 1);
        assert!(tree.validate().is_ok());
    }
    assert!(tree.is_empty());
}
