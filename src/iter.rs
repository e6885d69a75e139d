//! Traversals over an [`OrderedBinaryTree`][crate::OrderedBinaryTree].
//!
//! Each iterator keeps its own stack of pending nodes, so it needs `O(height)` extra space and
//! no recursion. They hold a shared borrow of the tree for as long as they live; the tree can't be
//! changed until they're dropped. Once one returns `None` it keeps returning `None`, and a new
//! pass needs a new iterator.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Ascending order: left subtree, node, right subtree.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been pushed but not yet yielded. The top is the next node.
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.len -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for InOrder<'a, T> {}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Node first, then its left subtree, then its right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.len -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Left subtree, then right subtree, then the node. The root is always last.
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Pending nodes, each marked with whether its children have already been pushed above it.
    stack: Vec<(&'a Node<T>, bool)>,
    len: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.len -= 1;
                return Some(node.value());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for PostOrder<'a, T> {}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}
