use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::red_black_tree::iter::{InOrder, IntoIter, Iter, NodeRef, Nodes};
use crate::red_black_tree::node::{Color, Node};
use log::trace;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors each node red or black.
/// The root is black, no red node has a red child, and every path from a node down to an absent
/// child crosses the same number of black nodes. Together these keep the height within twice the
/// optimum.
///
/// Nodes are stored in an arena and refer to their children and parent by index, so the tree can
/// walk upward during rebalancing without reference counting. Equal values are kept and placed
/// after the existing ones.
///
/// # Examples
///
/// ```
/// use arena_rbtree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.add(3);
/// tree.add(1);
/// tree.add(2);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Some(&1));
/// assert_eq!(tree.max(), Some(&3));
///
/// assert_eq!(tree.remove(&2), Ok(Some(2)));
/// assert_eq!(tree.remove(&2), Ok(None));
/// assert!(tree.validate().is_ok());
/// ```
pub struct RedBlackTree<T> {
    pub(super) arena: Arena<Node<T>>,
    pub(super) root: Option<NodeId>,
    len: usize,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Constructs a tree holding every value of `values`, added in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);
    /// assert_eq!(tree.len(), 9);
    /// assert_eq!(tree.root().map(|node| node.is_black()), Some(true));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }

    /// Adds a value to the tree. Equal values are kept side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let id = self.arena.allocate(Node::new(value));
        self.insert_node(id);
        self.len += 1;
    }

    /// Removes one occurrence of `value`. Returns `Ok(None)` and leaves the tree untouched if the
    /// value is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree is found in a state that no deletion case covers. This only
    /// happens if the red black invariants were already broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_values(vec![1, 2, 3]);
    /// assert_eq!(tree.remove(&2), Ok(Some(2)));
    /// assert_eq!(tree.remove(&4), Ok(None));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<Option<T>>
    where
        T: Ord,
    {
        let id = match self.find(value) {
            Some(id) => id,
            None => return Ok(None),
        };
        let removed = self.remove_node(id)?;
        self.len -= 1;
        Ok(Some(removed))
    }

    /// Removes one occurrence of every value in `values` and returns how many were found.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_values(1..=7);
    /// assert_eq!(tree.remove_all(&[3, 6, 8]), Ok(2));
    /// assert!(!tree.contains(&3));
    /// assert!(!tree.contains(&6));
    /// ```
    pub fn remove_all<'a, I>(&mut self, values: I) -> Result<usize>
    where
        T: Ord + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut removed = 0;
        for value in values {
            if self.remove(value)?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![1, 2, 3, 4]);
    /// assert!(tree.contains(&4));
    /// assert!(!tree.contains(&5));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![3, 1, 2]);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.minimum(root)].value)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![3, 1, 2]);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.maximum(root)].value)
    }

    /// Returns a read-only view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Returns an iterator over the values of the tree in level order, starting at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![1, 2, 3]);
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&2, &1, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over read-only node views in level order.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Returns an iterator over the values of the tree in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![5, 1, 3, 1]);
    /// assert_eq!(tree.in_order().collect::<Vec<&u32>>(), vec![&1, &1, &3, &5]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }

    pub(super) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].left
    }

    pub(super) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].right
    }

    pub(super) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    // absent nodes are black
    pub(super) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.arena[id].is_red())
    }

    pub(super) fn is_black(&self, id: Option<NodeId>) -> bool {
        !self.is_red(id)
    }

    // absent nodes are leaves
    pub(super) fn is_leaf(&self, id: Option<NodeId>) -> bool {
        id.map_or(true, |id| self.arena[id].is_leaf())
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena[id].color = color;
    }

    pub(super) fn is_left(&self, id: NodeId) -> bool {
        match self.parent(id) {
            Some(parent) => self.left(parent) == Some(id),
            None => false,
        }
    }

    pub(super) fn is_right(&self, id: NodeId) -> bool {
        match self.parent(id) {
            Some(parent) => self.right(parent) == Some(id),
            None => false,
        }
    }

    pub(super) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        if self.is_left(id) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    pub(super) fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.arena[parent].left = child;
        if let Some(child) = child {
            self.arena[child].parent = Some(parent);
        }
    }

    pub(super) fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.arena[parent].right = child;
        if let Some(child) = child {
            self.arena[child].parent = Some(parent);
        }
    }

    /// Clears the parent slot holding `id` and the parent link of `id`.
    pub(super) fn unbind_from_parent(&mut self, id: NodeId) {
        let parent = match self.parent(id) {
            Some(parent) => parent,
            None => return,
        };
        if self.left(parent) == Some(id) {
            self.arena[parent].left = None;
        } else {
            self.arena[parent].right = None;
        }
        self.arena[id].parent = None;
    }

    // Puts `new` in the slot `old` occupies, reseating the root if `old` is the root.
    fn replace_in_parent(&mut self, old: NodeId, new: Option<NodeId>) {
        match self.parent(old) {
            None => {
                self.root = new;
                if let Some(new) = new {
                    self.arena[new].parent = None;
                }
            },
            Some(parent) => {
                if self.left(parent) == Some(old) {
                    self.set_left(parent, new);
                } else {
                    self.set_right(parent, new);
                }
            },
        }
        self.arena[old].parent = None;
    }

    pub(super) fn rotate_left(&mut self, id: NodeId) {
        let child = self.right(id).expect("Expected right child node to be `Some`.");
        trace!("rotating left at {:?}", id);
        self.unbind_from_parent(child);
        self.replace_in_parent(id, Some(child));
        let inner = self.left(child);
        self.set_right(id, inner);
        self.set_left(child, Some(id));
    }

    pub(super) fn rotate_right(&mut self, id: NodeId) {
        let child = self.left(id).expect("Expected left child node to be `Some`.");
        trace!("rotating right at {:?}", id);
        self.unbind_from_parent(child);
        self.replace_in_parent(id, Some(child));
        let inner = self.right(child);
        self.set_left(id, inner);
        self.set_right(child, Some(id));
    }

    /// Moves `new` into the position of `old` and hands it the children of `old`.
    ///
    /// `new` is detached from its own parent first, so it may be a child of `old`. The children
    /// `new` had are dropped from the tree, and `old` ends up with no links at all.
    pub(super) fn transplant(&mut self, old: Option<NodeId>, new: Option<NodeId>) -> Result<()> {
        let old = old.ok_or(Error::AbsentNode("replaced"))?;
        let new = new.ok_or(Error::AbsentNode("replacement"))?;
        self.unbind_from_parent(new);
        self.replace_in_parent(old, Some(new));
        let left = self.arena[old].left.take();
        let right = self.arena[old].right.take();
        self.set_left(new, left);
        self.set_right(new, right);
        Ok(())
    }

    pub(super) fn minimum(&self, start: NodeId) -> NodeId {
        let mut curr = start;
        while let Some(left) = self.left(curr) {
            curr = left;
        }
        curr
    }

    pub(super) fn maximum(&self, start: NodeId) -> NodeId {
        let mut curr = start;
        while let Some(right) = self.right(curr) {
            curr = right;
        }
        curr
    }

    pub(super) fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match value.cmp(&self.arena[id].value) {
                Ordering::Less => self.left(id),
                Ordering::Greater => self.right(id),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values(iter)
    }
}

impl<T> IntoIterator for RedBlackTree<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for RedBlackTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.in_order().eq(other.in_order())
    }
}

impl<T> Eq for RedBlackTree<T> where T: Eq {}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}
