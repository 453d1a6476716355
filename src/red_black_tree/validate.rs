use crate::arena::NodeId;
use crate::error::{Error, Result};
use crate::red_black_tree::tree::RedBlackTree;

impl<T> RedBlackTree<T> {
    /// Checks every red black tree invariant and returns the black height of the tree: the number
    /// of black nodes on any path from the root down to an absent child. An empty tree has a black
    /// height of zero.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant found.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);
    /// assert_eq!(tree.validate(), Ok(2));
    /// ```
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        let root = match self.root {
            Some(root) => root,
            None => {
                return if self.len() == 0 {
                    Ok(0)
                } else {
                    Err(Error::LengthMismatch {
                        expected: self.len(),
                        found: 0,
                    })
                };
            },
        };

        if self.is_red(Some(root)) {
            return Err(Error::RedRoot);
        }
        if self.parent(root).is_some() {
            return Err(Error::BrokenParentLink);
        }

        let height = self.check_subtree(root)?;

        let mut count = 0;
        let mut prev: Option<&T> = None;
        for value in self.in_order() {
            if prev.map_or(false, |prev| prev > value) {
                return Err(Error::OutOfOrder);
            }
            prev = Some(value);
            count += 1;
        }

        if count != self.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                found: count,
            });
        }
        if self.arena.len() != self.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                found: self.arena.len(),
            });
        }

        Ok(height)
    }

    // Returns the black height of the subtree rooted at `id`, counting `id` itself.
    fn check_subtree(&self, id: NodeId) -> Result<usize> {
        let mut heights = [0; 2];
        for (height, child) in heights.iter_mut().zip(&[self.left(id), self.right(id)]) {
            if let Some(child) = *child {
                if self.parent(child) != Some(id) {
                    return Err(Error::BrokenParentLink);
                }
                if self.is_red(Some(id)) && self.is_red(Some(child)) {
                    return Err(Error::RedViolation);
                }
                *height = self.check_subtree(child)?;
            }
        }

        if heights[0] != heights[1] {
            return Err(Error::BlackHeightMismatch {
                expected: heights[0],
                found: heights[1],
            });
        }
        Ok(heights[0] + if self.is_black(Some(id)) { 1 } else { 0 })
    }

    /// Returns, for every leaf in level order, the number of black nodes met walking from the leaf
    /// up to the root, counting the leaf and excluding the root. A valid tree yields a single
    /// distinct value.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_rbtree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);
    /// let mut heights = tree.leaf_black_heights();
    /// heights.dedup();
    /// assert_eq!(heights.len(), 1);
    /// ```
    pub fn leaf_black_heights(&self) -> Vec<usize> {
        self.nodes()
            .filter(|node| node.is_leaf())
            .map(|leaf| {
                let mut count = 0;
                let mut curr = leaf;
                while let Some(parent) = curr.parent() {
                    if curr.is_black() {
                        count += 1;
                    }
                    curr = parent;
                }
                count
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::red_black_tree::node::Color;
    use crate::red_black_tree::RedBlackTree;

    #[test]
    fn test_validate_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.validate(), Ok(0));
        assert!(tree.leaf_black_heights().is_empty());
    }

    #[test]
    fn test_validate_sample() {
        let tree = RedBlackTree::from_values(vec![15, 5, 1, 11, 14, 8, 22, 9, 3]);
        assert_eq!(tree.validate(), Ok(2));
        assert!(tree.root().unwrap().is_black());

        let heights = tree.leaf_black_heights();
        assert!(!heights.is_empty());
        assert!(heights.iter().all(|height| *height == heights[0]));
    }

    #[test]
    fn test_validate_red_root() {
        let mut tree = RedBlackTree::from_values(vec![1]);
        let root = tree.root.unwrap();
        tree.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(Error::RedRoot));
    }

    #[test]
    fn test_validate_red_violation() {
        let mut tree = RedBlackTree::from_values(vec![2, 1, 3, 4]);
        let id = tree.find(&3).unwrap();
        tree.set_color(id, Color::Red);
        assert_eq!(tree.validate(), Err(Error::RedViolation));
    }

    #[test]
    fn test_validate_black_height_mismatch() {
        let mut tree = RedBlackTree::from_values(vec![2, 1, 3]);
        let id = tree.find(&1).unwrap();
        tree.set_color(id, Color::Black);
        assert_eq!(
            tree.validate(),
            Err(Error::BlackHeightMismatch {
                expected: 1,
                found: 0,
            }),
        );
    }

    #[test]
    fn test_validate_out_of_order() {
        let mut tree = RedBlackTree::from_values(vec![2, 1, 3]);
        let root = tree.root.unwrap();
        tree.arena[root].value = 0;
        assert_eq!(tree.validate(), Err(Error::OutOfOrder));
    }
}
