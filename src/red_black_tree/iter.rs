use crate::arena::NodeId;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::RedBlackTree;
use std::collections::VecDeque;
use std::vec::Vec;

/// A read-only view of a node of a `RedBlackTree<T>`.
///
/// An absent child or parent is reported as `None`, which stands for a black nil leaf.
///
/// # Examples
///
/// ```
/// use arena_rbtree::{Color, RedBlackTree};
///
/// let tree = RedBlackTree::from_values(vec![2, 1, 3]);
/// let root = tree.root().unwrap();
/// assert_eq!(root.value(), &2);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().map(|node| node.is_red()), Some(true));
/// assert!(root.parent().is_none());
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a RedBlackTree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(super) fn new(tree: &'a RedBlackTree<T>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn value(&self) -> &'a T {
        &self.tree.arena[self.id].value
    }

    pub fn color(&self) -> Color {
        self.tree.arena[self.id].color
    }

    pub fn is_red(&self) -> bool {
        self.tree.arena[self.id].is_red()
    }

    pub fn is_black(&self) -> bool {
        self.tree.arena[self.id].is_black()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.tree.arena[self.id].is_leaf()
    }

    pub fn is_left(&self) -> bool {
        self.tree.is_left(self.id)
    }

    pub fn is_right(&self) -> bool {
        self.tree.is_right(self.id)
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.tree.left(self.id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.tree.right(self.id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.tree.parent(self.id))
    }

    pub fn sibling(&self) -> Option<NodeRef<'a, T>> {
        self.wrap(self.tree.sibling(self.id))
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

/// An iterator over the nodes of a `RedBlackTree<T>`.
///
/// This iterator walks the tree breadth first and yields `NodeRef` views.
pub struct Nodes<'a, T> {
    tree: &'a RedBlackTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Nodes<'a, T> {
    pub(super) fn new(tree: &'a RedBlackTree<T>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = tree.root {
            queue.push_back(root);
        }
        Nodes { tree, queue }
    }
}

impl<'a, T> Iterator for Nodes<'a, T>
where
    T: 'a,
{
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        if let Some(left) = self.tree.left(id) {
            self.queue.push_back(left);
        }
        if let Some(right) = self.tree.right(id) {
            self.queue.push_back(right);
        }
        Some(NodeRef::new(self.tree, id))
    }
}

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator walks the tree breadth first and yields immutable references.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a RedBlackTree<T>) -> Self {
        Iter {
            nodes: Nodes::new(tree),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.value())
    }
}

/// An in-order iterator for `RedBlackTree<T>`.
///
/// This iterator yields immutable references in non-decreasing order.
pub struct InOrder<'a, T> {
    tree: &'a RedBlackTree<T>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(super) fn new(tree: &'a RedBlackTree<T>) -> Self {
        InOrder {
            tree,
            current: tree.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.left(id);
        }
        let id = self.stack.pop()?;
        self.current = self.tree.right(id);
        Some(&self.tree.arena[id].value)
    }
}

/// An owning iterator for `RedBlackTree<T>`.
///
/// This iterator yields owned values in non-decreasing order.
pub struct IntoIter<T> {
    tree: RedBlackTree<T>,
    current: Option<NodeId>,
    stack: Vec<NodeId>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(tree: RedBlackTree<T>) -> Self {
        let current = tree.root;
        IntoIter {
            tree,
            current,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = self.tree.left(id);
        }
        let id = self.stack.pop()?;
        self.current = self.tree.right(id);
        // children are read before the node goes back to the arena
        Some(self.tree.arena.free(id).value)
    }
}

#[cfg(test)]
mod tests {
    use crate::red_black_tree::RedBlackTree;

    #[test]
    fn test_iter_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.in_order().next(), None);
        assert_eq!(tree.nodes().count(), 0);
    }

    #[test]
    fn test_iter_level_order() {
        let tree = RedBlackTree::from_values(1..=7);
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![2, 1, 4, 3, 6, 5, 7],
        );
        assert_eq!((&tree).into_iter().count(), tree.len());
    }

    #[test]
    fn test_in_order() {
        let tree = RedBlackTree::from_values(vec![5, 3, 9, 1, 5, 7]);
        assert_eq!(
            tree.in_order().collect::<Vec<&u32>>(),
            vec![&1, &3, &5, &5, &7, &9],
        );
    }

    #[test]
    fn test_into_iter() {
        let tree = RedBlackTree::from_values(vec![5, 3, 9, 1, 5, 7]);
        assert_eq!(
            tree.into_iter().collect::<Vec<u32>>(),
            vec![1, 3, 5, 5, 7, 9],
        );
    }

    #[test]
    fn test_node_links() {
        let tree = RedBlackTree::from_values(1..=7);
        for node in tree.nodes() {
            if let Some(left) = node.left() {
                assert!(left.is_left());
                assert_eq!(left.parent().map(|parent| parent.value()), Some(node.value()));
            }
            if let Some(right) = node.right() {
                assert!(right.is_right());
                assert_eq!(right.parent().map(|parent| parent.value()), Some(node.value()));
            }
            if node.is_red() {
                assert!(node.left().map_or(true, |child| child.is_black()));
                assert!(node.right().map_or(true, |child| child.is_black()));
            }
        }
    }

    #[test]
    fn test_node_sibling() {
        let tree = RedBlackTree::from_values(vec![2, 1, 3]);
        let root = tree.root().unwrap();
        let left = root.left().unwrap();
        assert_eq!(left.sibling().map(|node| *node.value()), Some(3));
        assert!(root.sibling().is_none());
        assert!(left.is_leaf());
        assert!(!root.is_leaf());
    }
}
