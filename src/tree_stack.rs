//! Stack-based (iterative) tree traversal variants.
//!
//! Same results as the recursive walks in `tree`, with an explicit stack
//! instead of the call stack.

use tracing::instrument;

use crate::tree::{BinaryTree, Node};

impl<T> BinaryTree<T> {
    /// Iterative preorder: pop, visit, push right then left.
    #[instrument(level = "debug", skip(self))]
    pub fn preorder_iterative(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }

        while let Some(node) = stack.pop() {
            out.push(&node.value);
            // Right first so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }

        out
    }

    /// Iterative inorder: slide down the left spine, then visit and turn
    /// right.
    #[instrument(level = "debug", skip(self))]
    pub fn inorder_iterative(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let node = stack.pop().expect("outer condition guarantees an entry");
            out.push(&node.value);
            current = node.right.as_deref();
        }

        out
    }

    /// Height via an explicit stack of (node, depth) pairs.
    #[instrument(level = "debug", skip(self))]
    pub fn height_iterative(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }

        max_depth
    }
}
