//! Errors surfaced by [`Node`][crate::node::Node] and [`Tree`][crate::tree::Tree] operations.

use thiserror::Error;

/// Everything that can go wrong when reading, mutating or rebuilding a tree. None of these are
/// transient: each one is either a broken caller contract or malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The content of a node without a payload was read.
    #[error("reading content of empty node")]
    EmptyNodeAccess,

    /// `remove` was called on a tree without a root.
    #[error("trying to remove from empty tree")]
    EmptyTree,

    /// `remove` was asked for a value no node holds.
    #[error("element not found")]
    NotFound,

    /// The serialized text did not follow the tree grammar, or an element rejected its content.
    #[error("malformed tree text: {0}")]
    Deserialization(String),
}

/// Result type alias for tree operations.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
