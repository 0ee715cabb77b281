//! This crate exposes an ordered, unique-valued container built as a
//! Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
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
//! This tree additionally guarantees that every stored value is unique
//! (inserting a value that is already present reports a failure and leaves
//! the tree untouched) and it does not rebalance itself on every mutation.
//! Instead, [`Tree::rebalance`] rebuilds the whole tree to minimal height on
//! demand, which suits workloads that mutate in bursts and query in between.

#![deny(missing_docs)]

pub mod tree;

pub use crate::tree::{Tree, TreeInfo};
