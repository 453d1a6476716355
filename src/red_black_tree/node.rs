use crate::arena::NodeId;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Absent children and the absent parent of the root are `None`; a `None` slot plays the part of
/// the black nil leaf.
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_node_is_red_leaf() {
        let node = Node::new(1);
        assert!(node.is_red());
        assert!(node.is_leaf());
        assert!(node.parent.is_none());
    }
}
