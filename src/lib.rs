//! This crate exposes an ordered set backed by a Binary Search Tree (BST),
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree here does no rebalancing, so its height is `O(N)` in the worst
//! case (e.g. inserting already-sorted input). That is a documented
//! limitation of this crate, not a bug - see [`Tree`].
//!
//! Ordering is pluggable: by default elements are compared with their [`Ord`]
//! implementation, but any [`Comparator`] can be injected to order elements
//! that aren't intrinsically comparable (or to order them differently).

#![deny(missing_docs)]

pub mod compare;
pub mod tree;


pub use crate::compare::{Comparator, FromFn, Natural};
pub use crate::tree::Tree;
