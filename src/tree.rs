//! Binary trees and binary search trees.
//!
//! [`BinaryTree`] is an arbitrary owned tree (`Option<Box<Node>>`
//! children) with the structural operations; [`Bst`] layers the ordered
//! operations on top. Iterative traversal variants live in `tree_stack`
//! and `tree_queue`.

use itertools::Itertools;
use tracing::instrument;

/// Owned binary tree node with public links, so arbitrary shapes can be
/// built by hand (the BST validity check needs invalid trees to exist).
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(
        value: T,
        left: Option<Box<Node<T>>>,
        right: Option<Box<Node<T>>>,
    ) -> Self {
        Self { value, left, right }
    }
}

/// Arbitrary binary tree.
#[derive(Debug, Default)]
pub struct BinaryTree<T> {
    pub root: Option<Box<Node<T>>>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn from_root(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes on the longest root-to-leaf path; the empty tree has height 0.
    pub fn height(&self) -> usize {
        fn walk<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| {
                1 + walk(n.left.as_deref()).max(walk(n.right.as_deref()))
            })
        }
        walk(self.root.as_deref())
    }

    /// Recursive preorder: root, left, right.
    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                out.push(&n.value);
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root.as_deref(), &mut out);
        out
    }

    /// Recursive inorder: left, root, right.
    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(&n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root.as_deref(), &mut out);
        out
    }

    /// Recursive postorder: left, right, root.
    pub fn postorder(&self) -> Vec<&T> {
        fn walk<'a, T>(node: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
                out.push(&n.value);
            }
        }
        let mut out = Vec::new();
        walk(self.root.as_deref(), &mut out);
        out
    }
}

impl<T: Ord> BinaryTree<T> {
    /// BST validity: the in-order sequence must be strictly increasing.
    #[instrument(level = "debug", skip(self))]
    pub fn is_bst(&self) -> bool {
        self.inorder().iter().tuple_windows().all(|(a, b)| a < b)
    }
}

/// Binary search tree. Duplicates are inserted into the right subtree.
#[derive(Debug, Default)]
pub struct Bst<T: Ord> {
    tree: BinaryTree<T>,
}

impl<T: Ord> Bst<T> {
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }

    /// The underlying tree, for traversals and height queries.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.tree.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.tree.root.as_deref();
        while let Some(node) = current {
            if *value == node.value {
                return true;
            }
            current = if *value < node.value {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.tree.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Remove one occurrence of `value`. Returns whether it was present.
    ///
    /// Leaf and one-child cases splice the child up; the two-child case
    /// replaces the value with its in-order successor (minimum of the
    /// right subtree) and removes that node instead.
    #[instrument(level = "debug", skip(self, value))]
    pub fn remove(&mut self, value: &T) -> bool {
        Self::remove_from(&mut self.tree.root, value)
    }

    fn remove_from(slot: &mut Option<Box<Node<T>>>, value: &T) -> bool {
        let Some(node) = slot else {
            return false;
        };

        if *value < node.value {
            Self::remove_from(&mut node.left, value)
        } else if *value > node.value {
            Self::remove_from(&mut node.right, value)
        } else {
            match (node.left.is_some(), node.right.is_some()) {
                (true, true) => {
                    let successor =
                        Self::take_min(&mut node.right).expect("right subtree is non-empty");
                    node.value = successor;
                }
                _ => {
                    let node = slot.take().expect("matched Some above");
                    *slot = node.left.or(node.right);
                }
            }
            true
        }
    }

    /// Detach and return the minimum of the subtree rooted at `slot`.
    fn take_min(slot: &mut Option<Box<Node<T>>>) -> Option<T> {
        let mut current = slot;
        while current.as_ref()?.left.is_some() {
            current = &mut current.as_mut().expect("checked above").left;
        }
        let node = current.take().expect("loop guarantees Some");
        *current = node.right;
        Some(node.value)
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bst = Bst::new();
        for value in iter {
            bst.insert(value);
        }
        bst
    }
}
