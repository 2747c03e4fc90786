//! Pre-, in- and post-order walks over a [`Tree`]. Each walk keeps its own `Vec` stack of
//! borrowed nodes instead of recursing, so it copes with trees of any depth.
//!
//! # Examples
//!
//! ```
//! use plainbst::{Order, Tree};
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut seen = Vec::new();
//! tree.traverse(Order::PostOrder, |v| seen.push(*v));
//! assert_eq!(seen, [1, 3, 2]);
//!
//! // The same walks are available lazily.
//! let pre: Vec<_> = tree.iter(Order::PreOrder).collect();
//! assert_eq!(pre, [&2, &1, &3]);
//!
//! // And iterating a `&Tree` directly is in-order.
//! assert!((&tree).into_iter().eq([1, 2, 3].iter()));
//! ```

use crate::node::Node;
use crate::tree::Tree;

/// The order in which a traversal visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This is ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

/// A lazy walk over a tree's values in some [`Order`]. Created by [`Tree::iter`].
pub struct Traversal<'a, T> {
    walk: Walk<'a, T>,
}

enum Walk<'a, T> {
    Pre {
        stack: Vec<&'a Node<T>>,
    },
    In {
        stack: Vec<&'a Node<T>>,
        current: Option<&'a Node<T>>,
    },
    /// The flag records whether the node's children have already been pushed.
    Post {
        stack: Vec<(&'a Node<T>, bool)>,
    },
}

impl<'a, T> Traversal<'a, T> {
    fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        let walk = match order {
            Order::PreOrder => Walk::Pre {
                stack: root.into_iter().collect(),
            },
            Order::InOrder => Walk::In {
                stack: Vec::new(),
                current: root,
            },
            Order::PostOrder => Walk::Post {
                stack: root.map(|n| (n, false)).into_iter().collect(),
            },
        };
        Self { walk }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Nodes inside a tree always carry content; an empty one would simply be skipped.
        loop {
            let node = match &mut self.walk {
                Walk::Pre { stack } => {
                    let node = stack.pop()?;
                    // Right first so the left subtree comes off the stack first.
                    stack.extend(node.right());
                    stack.extend(node.left());
                    node
                }
                Walk::In { stack, current } => {
                    while let Some(node) = *current {
                        stack.push(node);
                        *current = node.left();
                    }
                    let node = stack.pop()?;
                    *current = node.right();
                    node
                }
                Walk::Post { stack } => {
                    let (node, expanded) = stack.pop()?;
                    if !expanded {
                        stack.push((node, true));
                        stack.extend(node.right().map(|n| (n, false)));
                        stack.extend(node.left().map(|n| (n, false)));
                        continue;
                    }
                    node
                }
            };
            if let Some(content) = node.payload() {
                return Some(content);
            }
        }
    }
}

impl<T> Tree<T> {
    /// A lazy walk over every value in `order`.
    pub fn iter(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root(), order)
    }

    /// Calls `visit` once for every value, eagerly, in `order`.
    pub fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter(order) {
            visit(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::InOrder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALANCED: [i32; 15] = [8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15];

    fn collect(tree: &Tree<i32>, order: Order) -> Vec<i32> {
        let mut seen = Vec::new();
        tree.traverse(order, |v| seen.push(*v));
        seen
    }

    #[test]
    fn balanced_pre_order() {
        let tree: Tree<_> = BALANCED.into_iter().collect();
        assert_eq!(
            collect(&tree, Order::PreOrder),
            [8, 4, 2, 1, 3, 6, 5, 7, 12, 10, 9, 11, 14, 13, 15]
        );
    }

    #[test]
    fn balanced_in_order() {
        let tree: Tree<_> = BALANCED.into_iter().collect();
        assert_eq!(collect(&tree, Order::InOrder), (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn balanced_post_order() {
        let tree: Tree<_> = BALANCED.into_iter().collect();
        assert_eq!(
            collect(&tree, Order::PostOrder),
            [1, 3, 2, 5, 7, 6, 4, 9, 11, 10, 13, 15, 14, 12, 8]
        );
    }

    #[test]
    fn right_skewed_chain() {
        let tree: Tree<_> = (0..5).collect();

        assert_eq!(collect(&tree, Order::PreOrder), [0, 1, 2, 3, 4]);
        assert_eq!(collect(&tree, Order::InOrder), [0, 1, 2, 3, 4]);
        assert_eq!(collect(&tree, Order::PostOrder), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn left_skewed_chain() {
        let tree: Tree<_> = (0..5).rev().collect();

        assert_eq!(collect(&tree, Order::PreOrder), [4, 3, 2, 1, 0]);
        assert_eq!(collect(&tree, Order::InOrder), [0, 1, 2, 3, 4]);
        assert_eq!(collect(&tree, Order::PostOrder), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let tree: Tree<i32> = Tree::new();

        for order in [Order::PreOrder, Order::InOrder, Order::PostOrder] {
            assert!(collect(&tree, order).is_empty());
            assert_eq!(tree.iter(order).next(), None);
        }
    }

    #[test]
    fn single_node() {
        let tree: Tree<_> = std::iter::once(1).collect();

        for order in [Order::PreOrder, Order::InOrder, Order::PostOrder] {
            assert_eq!(collect(&tree, order), [1]);
        }
    }

    #[test]
    fn duplicates_in_order() {
        let tree: Tree<_> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(collect(&tree, Order::InOrder), [1, 1, 2, 3, 3]);
    }

    #[test]
    fn iterator_is_lazy_and_resumable() {
        let tree: Tree<_> = BALANCED.into_iter().collect();
        let mut post = tree.iter(Order::PostOrder);

        assert_eq!(post.next(), Some(&1));
        assert_eq!(post.next(), Some(&3));
        assert_eq!(post.by_ref().take(2).collect::<Vec<_>>(), [&2, &5]);
        assert_eq!(post.count(), 11);
    }

    #[test]
    fn borrowed_tree_iterates_in_order() {
        let tree: Tree<_> = [5, 1, 9, 3].into_iter().collect();
        let mut seen = Vec::new();
        for v in &tree {
            seen.push(*v);
        }
        assert_eq!(seen, [1, 3, 5, 9]);
    }
}
