use crate::arena::NodeId;
use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::RedBlackTree;
use log::trace;

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Attaches the detached red node `id` below the first free slot on its search path and
    /// restores the invariants. Values equal to a visited node go right.
    pub(super) fn insert_node(&mut self, id: NodeId) {
        let mut curr = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(id);
                self.set_color(id, Color::Black);
                return;
            },
        };

        loop {
            let next = if self.goes_left(id, curr) {
                self.left(curr)
            } else {
                self.right(curr)
            };
            match next {
                Some(child) => curr = child,
                None => break,
            }
        }

        if self.goes_left(id, curr) {
            self.set_left(curr, Some(id));
        } else {
            self.set_right(curr, Some(id));
        }

        self.fix_after_insert(id);
    }

    fn goes_left(&self, id: NodeId, at: NodeId) -> bool {
        self.arena[id].value < self.arena[at].value
    }

    fn fix_after_insert(&mut self, id: NodeId) {
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            if self.is_black(Some(parent)) {
                break;
            }
            // a red parent is never the root
            let grandparent = self.parent(parent).expect("Expected red node to have a parent.");
            let uncle = self.sibling(parent);

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                trace!("recoloring red uncle {:?}", uncle);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.is_left(parent) {
                if self.is_right(node) {
                    node = parent;
                    self.rotate_left(node);
                }
                let parent = self.parent(node).expect("Expected node to have a parent.");
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                if self.is_left(node) {
                    node = parent;
                    self.rotate_right(node);
                }
                let parent = self.parent(node).expect("Expected node to have a parent.");
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
