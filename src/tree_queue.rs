//! Queue-based (breadth-first) tree traversal variants.

use std::collections::VecDeque;

use tracing::instrument;

use crate::tree::{BinaryTree, Node};

impl<T> BinaryTree<T> {
    /// Level-order traversal: one inner vector per depth level.
    #[instrument(level = "debug", skip(self))]
    pub fn level_order(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<T>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }

        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let node = queue.pop_front().expect("len checked");
                level.push(&node.value);
                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
            }
            levels.push(level);
        }

        levels
    }

    /// Height via breadth-first traversal with (node, depth) pairs.
    #[instrument(level = "debug", skip(self))]
    pub fn height_bfs(&self) -> usize {
        let mut max_depth = 0;
        let mut queue: VecDeque<(&Node<T>, usize)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((root, 1));
        }

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(left) = node.left.as_deref() {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back((right, depth + 1));
            }
        }

        max_depth
    }
}
