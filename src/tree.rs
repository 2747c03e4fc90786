//! An unbalanced Binary Search Tree built from exclusively owned [`Node`]s. Equal values always
//! go to the left, so for every node its left subtree holds values `<=` its own and its right
//! subtree holds values `>` its own.
//!
//! Nothing here rebalances. Inserting sorted input produces a chain as deep as it is long, which
//! is why every walk in this crate (including dropping) uses an explicit stack instead of
//! recursion.
//!
//! # Examples
//!
//! ```
//! use plainbst::tree::Tree;
//! use plainbst::TreeError;
//!
//! let mut tree = Tree::new();
//! tree.insert(3);
//! tree.insert(2);
//! tree.insert(4);
//!
//! assert!(tree.contains(&2));
//! assert_eq!(tree.len(), 3);
//!
//! // Removing hands the stored value back.
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.remove(&3), Err(TreeError::NotFound));
//! ```

use std::fmt;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::node::{Node, OwnedNode, Side};
use crate::traverse::Order;

/// A Binary Search Tree. Duplicates are allowed and are stored in the left subtree of the first
/// equal node met on the way down.
pub struct Tree<T> {
    root: Option<OwnedNode<T>>,
    len: usize,
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    // The values are listed in pre-order off the iterative walk, so the depth of the tree never
    // reaches the call stack.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("values", &PreOrderValues(self))
            .finish()
    }
}

struct PreOrderValues<'a, T>(&'a Tree<T>);

impl<T> fmt::Debug for PreOrderValues<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter(Order::PreOrder)).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree around an already shaped root. The caller vouches for the ordering.
    #[cfg(feature = "text")]
    pub(crate) fn from_root(root: Option<OwnedNode<T>>, len: usize) -> Self {
        Self { root, len }
    }

    /// Number of values stored, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Borrows the root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Number of levels on the longest root to leaf path. An empty tree has height 0 and a lone
    /// root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Inserts `value` as a new leaf. Starting at the root, the value descends left while it is
    /// `<=` the node it meets and right otherwise, and is linked into the first empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainbst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// // The duplicate went left.
    /// let root = tree.root().unwrap();
    /// assert!(root.has_left());
    /// assert!(!root.has_right());
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        graft(&mut self.root, Node::new_boxed(value));
        self.len += 1;
    }

    /// Whether some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            if node.payload() == Some(value) {
                return true;
            }
            current = node.child(side_for(Some(value), node));
        }
        false
    }

    /// Removes the first node holding `value` met on the insertion descent and returns its value.
    ///
    /// The removed node's left child takes its place under the parent (or becomes the root) and
    /// the removed node's right subtree is grafted back in below that slot. The ordering
    /// invariant survives but the shape is not kept close to the old one.
    ///
    /// ## Errors
    ///
    /// - [`TreeError::EmptyTree`] if there is nothing to remove from.
    /// - [`TreeError::NotFound`] if no node matches. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use plainbst::{Order, Tree};
    ///
    /// let mut tree: Tree<_> = [3, 2, 4, 5].into_iter().collect();
    /// tree.remove(&3).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.content(), Ok(&2));
    /// assert!(!root.has_left());
    /// assert_eq!(tree.iter(Order::PreOrder).copied().collect::<Vec<_>>(), [2, 4, 5]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        if self.root.is_none() {
            return Err(TreeError::EmptyTree);
        }

        // Nothing is touched until the match is found, so a miss leaves the tree as it was.
        let mut depth = 0;
        let mut slot = &mut self.root;
        loop {
            match slot {
                None => return Err(TreeError::NotFound),
                Some(node) if node.payload() == Some(value) => {
                    let content = node.take_content().ok_or(TreeError::EmptyNodeAccess)?;
                    let left = node.take_left();
                    let right = node.take_right();

                    if depth == 0 {
                        debug!("removing root, promoting its left subtree");
                    } else {
                        trace!("removing node at depth {}", depth);
                    }
                    *slot = left;
                    if let Some(right) = right {
                        debug!("grafting right subtree of removed node");
                        graft(slot, right);
                    }
                    self.len -= 1;
                    return Ok(content);
                }
                Some(node) => {
                    let side = side_for(Some(value), node);
                    slot = node.link_mut(side);
                    depth += 1;
                }
            }
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Which way `value` goes when it meets `node`.
fn side_for<T>(value: Option<&T>, node: &Node<T>) -> Side
where
    T: Ord,
{
    if value <= node.payload() {
        Side::Left
    } else {
        Side::Right
    }
}

/// Links `subtree` into the first empty slot found by descending from `slot` with the subtree
/// root's value.
///
/// Insertion grafts a single leaf. Removal grafts whole right subtrees, whose values are all
/// greater than anything they pass on the way down, so the result matches reinserting them one by
/// one in pre-order.
fn graft<T>(slot: &mut Option<OwnedNode<T>>, subtree: OwnedNode<T>)
where
    T: Ord,
{
    let mut slot = slot;
    while let Some(node) = slot {
        let side = side_for(subtree.payload(), node);
        trace!("descending {:?}", side);
        slot = node.link_mut(side);
    }
    *slot = Some(subtree);
}
