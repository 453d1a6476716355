use crate::arena::NodeId;
use crate::error::{Error, Result};
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::RedBlackTree;
use log::debug;

/// The structural situation of a node about to be deleted.
///
/// Variants are listed in the order they are tested; the first match wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum DeleteState {
    RedLeaf,
    BlackLeafRedParent,
    BlackLeafBlackParentRedSibling,
    BlackLeafBlackParentSiblingNotLeaf,
    BlackLeafBlackParentSiblingLeaf,
    TwoChildren,
    BlackWithBlackLeaves,
    OnlyOneChild,
}

impl<T> RedBlackTree<T> {
    pub(super) fn delete_state(&self, id: NodeId) -> Result<DeleteState> {
        let left = self.left(id);
        let right = self.right(id);
        let is_red = self.is_red(Some(id));

        if left.is_none() && right.is_none() {
            if is_red {
                return Ok(DeleteState::RedLeaf);
            }

            let parent = match self.parent(id) {
                Some(parent) => parent,
                None => return Err(Error::InvalidDeleteState(String::from("black leaf without a parent"))),
            };
            if self.is_red(Some(parent)) {
                return Ok(DeleteState::BlackLeafRedParent);
            }

            let sibling = self.sibling(id);
            if sibling.is_none() {
                return Err(Error::InvalidDeleteState(String::from("black leaf without a sibling")));
            }
            if self.is_red(sibling) {
                return Ok(DeleteState::BlackLeafBlackParentRedSibling);
            }
            if !self.is_leaf(sibling) {
                return Ok(DeleteState::BlackLeafBlackParentSiblingNotLeaf);
            }
            return Ok(DeleteState::BlackLeafBlackParentSiblingLeaf);
        }

        let black_with_black_leaves = !is_red
            && left.is_some()
            && right.is_some()
            && self.is_black(left)
            && self.is_leaf(left)
            && self.is_black(right)
            && self.is_leaf(right);

        if left.is_some() && right.is_some() && !black_with_black_leaves {
            return Ok(DeleteState::TwoChildren);
        }
        if black_with_black_leaves {
            return Ok(DeleteState::BlackWithBlackLeaves);
        }
        if left.is_some() != right.is_some() {
            return Ok(DeleteState::OnlyOneChild);
        }

        Err(Error::InvalidDeleteState(format!("unclassified node {:?}", id)))
    }

    /// Unlinks `id` from the tree, restores the invariants and returns its value.
    pub(super) fn remove_node(&mut self, id: NodeId) -> Result<T> {
        if self.root == Some(id) && self.is_leaf(Some(id)) {
            self.root = None;
            return Ok(self.arena.free(id).value);
        }

        let state = self.delete_state(id)?;
        debug!("deleting {:?} as {:?}", id, state);

        if state == DeleteState::TwoChildren {
            let right = self.right(id).ok_or(Error::AbsentNode("right child"))?;
            let successor = self.minimum(right);
            let successor_state = self.delete_state(successor)?;
            debug!("detaching successor {:?} as {:?}", successor, successor_state);
            self.detach(successor, successor_state)?;

            // the successor inherits the color the deleted node has after the detach rebalanced
            let color = self.arena[id].color;
            self.set_color(successor, color);
            self.transplant(Some(id), Some(successor))?;
        } else {
            self.detach(id, state)?;
        }

        Ok(self.arena.free(id).value)
    }

    // Removes `id` from the tree without freeing it. `id` is left with no links.
    fn detach(&mut self, id: NodeId, state: DeleteState) -> Result<()> {
        match state {
            DeleteState::RedLeaf => {
                self.unbind_from_parent(id);
                Ok(())
            },
            DeleteState::BlackLeafRedParent => self.delete_black_leaf_red_parent(id),
            DeleteState::BlackLeafBlackParentRedSibling => {
                self.delete_black_leaf_black_parent_red_sibling(id)
            },
            DeleteState::BlackLeafBlackParentSiblingNotLeaf => {
                self.delete_black_leaf_black_parent_sibling_not_leaf(id)
            },
            DeleteState::BlackLeafBlackParentSiblingLeaf => {
                self.delete_black_leaf_black_parent_sibling_leaf(id)
            },
            DeleteState::BlackWithBlackLeaves => self.delete_black_with_black_leaves(id),
            DeleteState::OnlyOneChild => self.delete_node_with_only_one_child(id),
            DeleteState::TwoChildren => Err(Error::InvalidDeleteState(format!(
                "node {:?} with two children cannot be detached directly",
                id,
            ))),
        }
    }

    fn delete_black_leaf_red_parent(&mut self, id: NodeId) -> Result<()> {
        self.resolve_red_parent(id)?;
        self.unbind_from_parent(id);
        Ok(())
    }

    fn delete_black_leaf_black_parent_red_sibling(&mut self, id: NodeId) -> Result<()> {
        self.rotate_red_sibling(id)?;
        self.resolve_red_parent(id)?;
        self.unbind_from_parent(id);
        Ok(())
    }

    fn delete_black_leaf_black_parent_sibling_not_leaf(&mut self, id: NodeId) -> Result<()> {
        self.borrow_from_sibling(id)?;
        self.unbind_from_parent(id);
        Ok(())
    }

    fn delete_black_leaf_black_parent_sibling_leaf(&mut self, id: NodeId) -> Result<()> {
        let parent = self.parent(id).ok_or(Error::AbsentNode("parent"))?;
        let sibling = self.sibling(id).ok_or(Error::AbsentNode("sibling"))?;
        self.set_color(sibling, Color::Red);
        self.unbind_from_parent(id);
        self.propagate_double_black(parent)
    }

    fn delete_black_with_black_leaves(&mut self, id: NodeId) -> Result<()> {
        let left = self.left(id);
        self.transplant(Some(id), left)?;
        let left = left.ok_or(Error::AbsentNode("left child"))?;
        if let Some(right) = self.right(left) {
            self.set_color(right, Color::Red);
        }
        self.propagate_double_black(left)
    }

    fn delete_node_with_only_one_child(&mut self, id: NodeId) -> Result<()> {
        let child = self.left(id).or_else(|| self.right(id));
        if !self.is_red(child) || !self.is_leaf(child) {
            return Err(Error::InvalidDeleteState(format!(
                "only child of {:?} is not a red leaf",
                id,
            )));
        }
        if let Some(child) = child {
            let color = self.arena[id].color;
            self.set_color(child, color);
        }
        self.transplant(Some(id), child)
    }

    // `id` is black and its parent is red, so its sibling is black.
    fn resolve_red_parent(&mut self, id: NodeId) -> Result<()> {
        let parent = self.parent(id).ok_or(Error::AbsentNode("parent"))?;
        let sibling = self.sibling(id).ok_or(Error::AbsentNode("sibling"))?;
        if self.is_leaf(Some(sibling)) {
            self.set_color(parent, Color::Black);
            self.set_color(sibling, Color::Red);
            Ok(())
        } else {
            self.borrow_from_sibling(id)
        }
    }

    // Turns a red sibling of `id` into its grandparent so that `id` gets a red parent and a black
    // sibling.
    fn rotate_red_sibling(&mut self, id: NodeId) -> Result<()> {
        let parent = self.parent(id).ok_or(Error::AbsentNode("parent"))?;
        let sibling = self.sibling(id).ok_or(Error::AbsentNode("sibling"))?;
        self.set_color(sibling, Color::Black);
        self.set_color(parent, Color::Red);
        if self.is_left(id) {
            self.rotate_left(parent);
        } else {
            self.rotate_right(parent);
        }
        Ok(())
    }

    // The black sibling of `id` has a red child. Rotates that child's weight over to the side of
    // `id`, which gains one black level. This never needs to propagate.
    fn borrow_from_sibling(&mut self, id: NodeId) -> Result<()> {
        let parent = self.parent(id).ok_or(Error::AbsentNode("parent"))?;
        let mut sibling = self.sibling(id).ok_or(Error::AbsentNode("sibling"))?;
        let is_left = self.is_left(id);
        let (near, far) = if is_left {
            (self.left(sibling), self.right(sibling))
        } else {
            (self.right(sibling), self.left(sibling))
        };

        if self.is_black(far) {
            let near = near.filter(|&near| self.is_red(Some(near)));
            let near = match near {
                Some(near) => near,
                None => return Err(Error::InvalidDeleteState(format!(
                    "sibling {:?} has no red child",
                    sibling,
                ))),
            };
            self.set_color(near, Color::Black);
            self.set_color(sibling, Color::Red);
            if is_left {
                self.rotate_right(sibling);
            } else {
                self.rotate_left(sibling);
            }
            sibling = near;
        }

        let far = if is_left {
            self.right(sibling)
        } else {
            self.left(sibling)
        };
        let parent_color = self.arena[parent].color;
        self.set_color(sibling, parent_color);
        self.set_color(parent, Color::Black);
        if let Some(far) = far {
            self.set_color(far, Color::Black);
        }
        if is_left {
            self.rotate_left(parent);
        } else {
            self.rotate_right(parent);
        }
        Ok(())
    }

    // The subtree rooted at `id` is one black node short. Walks up until the deficit is absorbed
    // by a red node, a rotation, or the root.
    fn propagate_double_black(&mut self, id: NodeId) -> Result<()> {
        let mut node = id;
        while self.root != Some(node) && self.is_black(Some(node)) {
            let mut sibling = self.sibling(node).ok_or(Error::AbsentNode("sibling"))?;
            if self.is_red(Some(sibling)) {
                self.rotate_red_sibling(node)?;
                sibling = self.sibling(node).ok_or(Error::AbsentNode("sibling"))?;
            }

            if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                self.set_color(sibling, Color::Red);
                node = self.parent(node).ok_or(Error::AbsentNode("parent"))?;
            } else {
                self.borrow_from_sibling(node)?;
                return Ok(());
            }
        }
        self.set_color(node, Color::Black);
        Ok(())
    }
}
