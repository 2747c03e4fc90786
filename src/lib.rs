//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any ordered element type,
//! with a shape preserving text format for element types that opt in.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! will typically store some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants of the BST here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than or
//!    equal to its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances, so the height depends
//! entirely on insertion order: sorted input gives a chain. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Example
//!
//! ```
//! use plainbst::{Order, Tree};
//!
//! let mut tree: Tree<_> = [8, 4, 12, 2, 6].into_iter().collect();
//! tree.remove(&4).unwrap();
//!
//! let sorted: Vec<_> = tree.iter(Order::InOrder).copied().collect();
//! assert_eq!(sorted, [2, 6, 8, 12]);
//! ```
//!
//! ## Features
//!
//! - `text` (default): the [`text`] module and `Tree::serialize`/`Tree::deserialize`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
#[cfg(feature = "text")]
pub mod text;
pub mod traverse;
pub mod tree;

pub use error::{Result, TreeError};
pub use node::{Node, OwnedNode, Side};
#[cfg(feature = "text")]
pub use text::{ReadContent, Tokens, WriteContent};
pub use traverse::{Order, Traversal};
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
