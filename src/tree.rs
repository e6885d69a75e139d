//! An unbalanced BST whose nodes know their parents. Children are owned through raw `NonNull`
//! handles so a node can be reached both from above (while searching) and from below (while
//! unlinking the minimum or maximum).
//!
//! # Examples
//!
//! ```
//! use ordered_bst::OrderedBinaryTree;
//!
//! let mut tree = OrderedBinaryTree::<i32>::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.contains(&1), Ok(false));
//!
//! assert_eq!(tree.add(1), Ok(true));
//! assert_eq!(tree.search(&1).unwrap().map(|n| n.value()), Some(&1));
//!
//! // Adding an equal element is refused and changes nothing.
//! assert_eq!(tree.add(1), Ok(false));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing the minimum hands back its element.
//! assert_eq!(tree.remove_min(), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, error, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, PostOrder, PreOrder};

/// A Binary Search Tree holding distinct elements in their natural order. It never rebalances,
/// so its shape is decided entirely by the order elements are added in.
///
/// Traversals borrow the tree, which rules out mutating it while one is in progress. The tree is
/// neither `Send` nor `Sync`.
pub struct OrderedBinaryTree<T> {
    root: Link<T>,
    size: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

impl<T> Default for OrderedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedBinaryTree<T> {
    fn drop(&mut self) {
        self.root.take().free_subtree();
    }
}

impl<T> Clone for OrderedBinaryTree<T>
where
    T: Clone + Ord,
{
    // Re-adding in pre-order gives back the same shape.
    fn clone(&self) -> Self {
        self.preorder_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for OrderedBinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder_iter()).finish()
    }
}

impl<T> Extend<T> for OrderedBinaryTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedBinaryTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedBinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder_iter()
    }
}

impl<T> OrderedBinaryTree<T> {
    /// Generate a new, empty `OrderedBinaryTree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            size: 0,
            _owns: PhantomData,
        }
    }

    /// The node at the top of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    /// The number of edges on the longest path from the root down to a leaf. A single node has a
    /// height of `0` and an empty tree a height of `-1`.
    ///
    /// This isn't cached so it visits every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let mut tree = OrderedBinaryTree::<i32>::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        let mut height = -1;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }

        height
    }

    /// The number of elements in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`][Self::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every element, leaving the tree empty.
    pub fn clear(&mut self) {
        debug!(discarded = self.size, "clearing tree");
        self.root.take().free_subtree();
        self.size = 0;
    }

    /// Visits the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let tree: OrderedBinaryTree<_> = [5, 3, 7, 2, 4].into_iter().collect();
    /// assert!(tree.inorder_iter().eq(&[2, 3, 4, 5, 7]));
    /// ```
    pub fn inorder_iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root(), self.size)
    }

    /// Visits every node before either of its children, left subtree first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let tree: OrderedBinaryTree<_> = [5, 3, 7, 2, 4].into_iter().collect();
    /// assert!(tree.preorder_iter().eq(&[5, 3, 2, 4, 7]));
    /// ```
    pub fn preorder_iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root(), self.size)
    }

    /// Visits every node after both of its children, so the root comes last.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let tree: OrderedBinaryTree<_> = [5, 3, 7, 2, 4].into_iter().collect();
    /// assert!(tree.postorder_iter().eq(&[2, 4, 3, 7, 5]));
    /// ```
    pub fn postorder_iter(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root(), self.size)
    }

    /// The smallest element, without removing it.
    pub fn min(&self) -> Option<&T> {
        let min = self.leftmost().0?;
        // SAFETY: The link came from this tree, which `&self` keeps alive and unchanged.
        Some(unsafe { &min.as_ref().value })
    }

    /// The largest element, without removing it.
    pub fn max(&self) -> Option<&T> {
        let max = self.rightmost().0?;
        // SAFETY: See `min`.
        Some(unsafe { &max.as_ref().value })
    }

    /// The link to the node reached by following left links from the root.
    fn leftmost(&self) -> Link<T> {
        let mut link = self.root;
        while let Some(left) = link.node().map(|n| n.left).filter(|l| l.0.is_some()) {
            link = left;
        }
        link
    }

    /// The link to the node reached by following right links from the root.
    fn rightmost(&self) -> Link<T> {
        let mut link = self.root;
        while let Some(right) = link.node().map(|n| n.right).filter(|l| l.0.is_some()) {
            link = right;
        }
        link
    }

    /// Checks whether an element equal to `value` is in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Error, OrderedBinaryTree};
    ///
    /// let tree: OrderedBinaryTree<_> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.contains(&1), Ok(true));
    /// assert_eq!(tree.contains(&42), Ok(false));
    /// assert_eq!(tree.contains(None::<&i32>), Err(Error::InvalidArgument("contains")));
    /// ```
    pub fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<bool>
    where
        T: Ord + 'a,
    {
        let value = value.into().ok_or_else(|| missing("contains"))?;
        Ok(self.find(value).is_some())
    }

    /// Finds the node holding an element equal to `value`. If there isn't one, `Ok(None)` is
    /// returned.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let tree: OrderedBinaryTree<_> = [2, 1].into_iter().collect();
    ///
    /// let one = tree.search(&1).unwrap().unwrap();
    /// assert_eq!(one.value(), &1);
    /// assert_eq!(one.parent().map(|p| p.value()), Some(&2));
    ///
    /// assert!(tree.search(&42).unwrap().is_none());
    /// ```
    pub fn search<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<Option<&Node<T>>>
    where
        T: Ord + 'a,
    {
        let value = value.into().ok_or_else(|| missing("search"))?;
        Ok(self.find(value))
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Adds `value` to the tree. Returns `Ok(false)` without touching the tree if an equal element
    /// is already present.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Error, OrderedBinaryTree};
    ///
    /// let mut tree = OrderedBinaryTree::<i32>::new();
    ///
    /// assert_eq!(tree.add(1), Ok(true));
    /// assert_eq!(tree.add(1), Ok(false));
    /// assert_eq!(tree.add(None::<i32>), Err(Error::InvalidArgument("add")));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn add(&mut self, value: impl Into<Option<T>>) -> Result<bool>
    where
        T: Ord,
    {
        let value = value.into().ok_or_else(|| missing("add"))?;
        Ok(self.insert(value))
    }

    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(mut current) = self.root.0 else {
            self.root = Link::new_node(value, Link(None));
            self.size += 1;
            return true;
        };

        loop {
            // SAFETY: `current` is reachable from `self.root` and we hold `&mut self`, so nothing
            // else references this node while `node` is alive.
            let node = unsafe { current.as_mut() };
            let slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("rejected element equal to an existing one");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
            match slot.0 {
                Some(child) => current = child,
                None => {
                    *slot = Link::new_node(value, Link(Some(current)));
                    node.check_links();
                    break;
                }
            }
        }
        self.size += 1;

        true
    }

    /// Removes the smallest element and returns it, or `None` if the tree is empty. The removed
    /// node's right subtree takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let mut tree: OrderedBinaryTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_min(), Some(1));
    /// assert_eq!(tree.remove_min(), Some(2));
    /// assert_eq!(tree.root().map(|n| n.value()), Some(&3));
    /// ```
    pub fn remove_min(&mut self) -> Option<T>
    where
        T: Ord,
    {
        let min = self.leftmost().0?;
        // SAFETY: `min` came from this tree and has no left child, and nothing borrows the tree
        // since we hold `&mut self`.
        let value = unsafe { self.unlink(min) };
        trace!(size = self.size, "removed minimum");

        Some(value)
    }

    /// Removes the largest element and returns it, or `None` if the tree is empty. The removed
    /// node's left subtree takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::OrderedBinaryTree;
    ///
    /// let mut tree: OrderedBinaryTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_max(), Some(3));
    /// assert_eq!(tree.remove_max(), Some(2));
    /// assert_eq!(tree.root().map(|n| n.value()), Some(&1));
    /// ```
    pub fn remove_max(&mut self) -> Option<T>
    where
        T: Ord,
    {
        let max = self.rightmost().0?;
        // SAFETY: `max` came from this tree and has no right child, and nothing borrows the tree
        // since we hold `&mut self`.
        let value = unsafe { self.unlink(max) };
        trace!(size = self.size, "removed maximum");

        Some(value)
    }

    /// Detaches `target` and moves its only subtree (if any) into the slot it occupied, then frees
    /// it and returns its element.
    ///
    /// # Safety
    ///
    /// `target` must be a node of this tree with at most one child, and no reference into the tree
    /// may be alive.
    unsafe fn unlink(&mut self, target: NonNull<Node<T>>) -> T
    where
        T: Ord,
    {
        {
            let node = target.as_ref();
            assert!(
                node.left.0.is_none() || node.right.0.is_none(),
                "Only nodes with at most one child can be unlinked"
            );
        }
        let Node {
            value,
            left,
            right,
            parent,
        } = *Box::from_raw(target.as_ptr());

        let mut orphan = if left.0.is_some() { left } else { right };
        if let Some(orphan) = orphan.node_mut() {
            orphan.parent = parent;
        }

        match parent.0 {
            None => self.root = orphan,
            Some(mut parent) => {
                let parent = parent.as_mut();
                // Only the address is compared; `target` is never dereferenced again.
                if parent.left.0 == Some(target) {
                    parent.left = orphan;
                } else {
                    parent.right = orphan;
                }
                parent.check_links();
            }
        }
        self.size -= 1;

        value
    }
}

/// Builds the error for an operation that was handed no element.
fn missing(operation: &'static str) -> Error {
    error!(operation, "an element is required but none was given");
    Error::InvalidArgument(operation)
}

struct Link<T>(Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    fn new_node(value: T, parent: Link<T>) -> Self {
        let node = Box::new(Node {
            value,
            left: Link(None),
            right: Link(None),
            parent,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn node(&self) -> Option<&Node<T>> {
        // SAFETY: A non-`None` link always points at a live `Node` owned by the tree. Shared
        // access only ever hands out `&Node`, and mutation requires `&mut` on the owning tree,
        // so the returned reference can't alias a mutable one.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn node_mut(&mut self) -> Option<&mut Node<T>> {
        // SAFETY: See `node`. Only called from `&mut OrderedBinaryTree` methods.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Frees this node and everything below it. Uses an explicit stack so a tree that has
    /// degenerated into a list doesn't overflow the call stack.
    fn free_subtree(self) {
        let mut pending: Vec<NonNull<Node<T>>> = self.0.into_iter().collect();
        while let Some(ptr) = pending.pop() {
            // SAFETY: Every node was allocated with `Box::new` in `Link::new_node` and is owned by
            // exactly one link, which the caller has already cleared, so each is freed once.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
        }
    }
}

/// A node of an [`OrderedBinaryTree`]. It holds one element and can be used to walk the tree in
/// any direction, but never to change it.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Neighbours are shown by value only, so formatting never walks the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .field("parent", &self.parent().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// The element stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree.
    pub fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    /// The root of this node's right subtree.
    pub fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<&Self> {
        self.parent.node()
    }

    /// In debug builds, asserts that this node's children are ordered around it and point back
    /// at it.
    fn check_links(&self)
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            let this = Some(NonNull::from(self));
            if let Some(left) = self.left() {
                assert!(left.value < self.value);
                assert_eq!(left.parent.0, this);
            }
            if let Some(right) = self.right() {
                assert!(right.value > self.value);
                assert_eq!(right.parent.0, this);
            }
        }
    }
}
