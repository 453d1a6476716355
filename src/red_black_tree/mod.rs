//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in an arena and keep a link to their parent, so insertion repairs the tree by
//! walking upward from the new node, and deletion picks one of a fixed set of cases from the
//! colors around the removed node.

mod insert;
mod iter;
mod node;
mod remove;
mod serialize;
mod tree;
mod validate;

pub use self::iter::{InOrder, IntoIter, Iter, NodeRef, Nodes};
pub use self::node::Color;
pub use self::tree::RedBlackTree;
