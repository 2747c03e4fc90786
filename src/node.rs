//! The cell a [`Tree`][crate::tree::Tree] is built from. A `Node` holds one optional payload and
//! exclusively owns its two children. It knows nothing about ordering; every tree shaped
//! algorithm lives in the tree module.
//!
//! # Examples
//!
//! ```
//! use plainbst::node::Node;
//!
//! let mut parent = Node::new(5);
//! parent.set_left(Some(Node::new_boxed(3)));
//!
//! assert_eq!(parent.content(), Ok(&5));
//! assert!(parent.has_left());
//! assert!(!parent.is_leaf());
//!
//! // Replacing a child drops the subtree that was there.
//! parent.set_left(None);
//! assert!(parent.is_leaf());
//! ```

use std::fmt;
use std::ptr;

use crate::error::{Result, TreeError};

/// A heap allocated node owned by exactly one parent link.
pub type OwnedNode<T> = Box<Node<T>>;

/// One of the two child slots of a [`Node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The slot holding values less than or equal to the node's value.
    Left,
    /// The slot holding values greater than the node's value.
    Right,
}

/// A tree cell with an optional payload and two owned child links. A node with no payload only
/// exists transiently during construction; nodes reachable from a tree always hold content.
pub struct Node<T> {
    content: Option<T>,
    left: Option<OwnedNode<T>>,
    right: Option<OwnedNode<T>>,
}

impl<T> Drop for Node<T> {
    // Dropping the children recursively would use one stack frame per level and a skewed tree
    // can be as deep as it is long. Detach every descendant first so each `Box` dies childless.
    fn drop(&mut self) {
        let mut stack: Vec<OwnedNode<T>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// Only this node's own fields: following the links would recurse once per level.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("content", &self.content)
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

impl<T> From<T> for Node<T> {
    fn from(content: T) -> Self {
        Self::new(content)
    }
}

impl<T> Node<T> {
    /// Wraps `content` in a new childless node.
    pub fn new(content: T) -> Self {
        Self {
            content: Some(content),
            left: None,
            right: None,
        }
    }

    /// Like [`Node::new`] but already boxed, ready to be linked into a parent.
    pub fn new_boxed(content: T) -> OwnedNode<T> {
        Box::new(Self::new(content))
    }

    /// A node without payload or children.
    pub fn empty() -> Self {
        Self {
            content: None,
            left: None,
            right: None,
        }
    }

    /// Whether this node has no payload.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Whether a left child is present.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Whether a right child is present.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Whether this node has no children at all.
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Whether `other` is this very node's left or right child. This compares identity, not
    /// content: an equal-valued node elsewhere in the tree is not a child.
    ///
    /// ```
    /// use plainbst::node::Node;
    ///
    /// let mut parent = Node::new(2);
    /// parent.set_right(Some(Node::new_boxed(3)));
    ///
    /// let lookalike = Node::new(3);
    /// assert!(parent.is_parent(parent.right().unwrap()));
    /// assert!(!parent.is_parent(&lookalike));
    /// ```
    pub fn is_parent(&self, other: &Node<T>) -> bool {
        let is = |child: Option<&Node<T>>| child.map_or(false, |child| ptr::eq(child, other));
        is(self.left()) || is(self.right())
    }

    /// Borrows the payload.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EmptyNodeAccess`] if the node has no payload.
    pub fn content(&self) -> Result<&T> {
        self.content.as_ref().ok_or(TreeError::EmptyNodeAccess)
    }

    /// Replaces the payload, dropping the previous one.
    pub fn set_content(&mut self, content: Option<T>) {
        self.content = content;
    }

    /// Detaches the payload, leaving the node empty.
    pub fn take_content(&mut self) -> Option<T> {
        self.content.take()
    }

    /// Borrows the left child.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Borrows the right child.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Borrows the child on `side`.
    pub fn child(&self, side: Side) -> Option<&Node<T>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Replaces the left link. Whatever subtree was linked there is dropped.
    pub fn set_left(&mut self, node: Option<OwnedNode<T>>) {
        self.left = node;
    }

    /// Replaces the right link. Whatever subtree was linked there is dropped.
    pub fn set_right(&mut self, node: Option<OwnedNode<T>>) {
        self.right = node;
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Option<OwnedNode<T>> {
        self.left.take()
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Option<OwnedNode<T>> {
        self.right.take()
    }

    /// The link on `side` itself, so a caller can descend through it or fill it.
    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Option<OwnedNode<T>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Raw payload access for walks that already know the node sits in a tree.
    pub(crate) fn payload(&self) -> Option<&T> {
        self.content.as_ref()
    }
}
