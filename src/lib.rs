//! A red black tree whose nodes are stored in an arena and linked by index.
//!
//! [`RedBlackTree`] is an ordered multiset over any `T: Ord`. Besides adding, removing and
//! searching it exposes read-only node views and [`RedBlackTree::validate`], which checks every
//! red black invariant, so callers can inspect the balancing at work.
//!
//! ```
//! use arena_rbtree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);
//! assert_eq!(tree.len(), 9);
//!
//! tree.remove_all(&[5, 14]).unwrap();
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.in_order().cloned().collect::<Vec<_>>(), vec![1, 3, 8, 9, 11, 15, 22]);
//! assert!(tree.validate().is_ok());
//! ```

mod arena;
mod error;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
pub use crate::red_black_tree::{Color, NodeRef, RedBlackTree};
