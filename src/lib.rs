//! This crate exposes an unbalanced Binary Search Tree (BST) that keeps a set of distinct,
//! ordered elements and can walk them in three orders.
//!
//! ## Binary Search Tree
//!
//! Each element lives in its own `Node`, and every `Node` has up to two children. The tree keeps
//! one rule everywhere: whatever hangs to the left of a `Node` is smaller than it, and whatever
//! hangs to its right is larger. Elements comparing equal can't both be stored, so the tree acts
//! as an ordered set.
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path from the root
//! `Node` to a leaf `Node`). The tree here never rebalances, so adding elements in sorted order
//! gives a height of `N - 1`.
//!
//! ## Traversals
//!
//! Every `Node` also links back to its parent. That's what lets [`OrderedBinaryTree`] remove its
//! smallest or largest element without remembering the path it took to get there. The elements
//! can be visited:
//!
//! - in order (left subtree, node, right subtree), which yields them sorted,
//! - in pre-order (node, left subtree, right subtree),
//! - in post-order (left subtree, right subtree, node).
//!
//! ```
//! use ordered_bst::OrderedBinaryTree;
//!
//! let tree: OrderedBinaryTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert!(tree.inorder_iter().eq(&[2, 3, 4, 5, 6, 7, 8]));
//! assert!(tree.preorder_iter().eq(&[5, 3, 2, 4, 7, 6, 8]));
//! assert!(tree.postorder_iter().eq(&[2, 4, 3, 6, 8, 7, 5]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod tree;

pub use error::{Error, Result};
pub use tree::{Node, OrderedBinaryTree};
