//! A classic owned, recursive BST holding a set of unique values.
//!
//! Every mutating operation is a recursive descent over single-owner
//! `Option<Box<Node>>` links, so the tree cannot alias or cycle and dropping
//! the root releases the whole node graph. The tree does not rebalance itself
//! on mutation; call [`Tree::rebalance`] to rebuild it to minimal height.
//!
//! # Examples
//!
//! ```
//! use bst_set::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting a new value succeeds, inserting it again does not.
//! assert!(tree.insert(1));
//! assert!(!tree.insert(1));
//!
//! assert!(tree.contains(&1));
//!
//! // Deleting reports whether the value was present.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::vec;

type Link<T> = Option<Box<Node<T>>>;

/// A binary search tree storing a set of unique values. This can be used for
/// inserting, finding, and deleting values, walking the tree in the three
/// canonical orders, and rebuilding it to minimal height on demand.
///
/// Cloning a `Tree` performs a structural deep copy: the clone has the exact
/// shape of the source with freshly allocated nodes, so mutating one never
/// affects the other.
pub struct Tree<T> {
    root: Link<T>,
}

/// Node count and height of a [`Tree`], as reported by [`Tree::info`] in a
/// single recursive pass.
///
/// Height is the edge count of the longest root-to-leaf path: a tree with a
/// lone root has height `Some(0)` and an empty tree has no path at all, which
/// is reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeInfo {
    /// How many nodes are in the tree.
    pub nodes: usize,
    /// Edge count of the longest root-to-leaf path, or `None` for an empty
    /// tree.
    pub height: Option<usize>,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Structural clone: the copy mirrors the source's shape node for node
    /// rather than reinserting values into a fresh tree.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    /// Drops `self`'s nodes and replaces them with a structural copy of
    /// `source`. Assigning a tree to itself is not expressible here: `self`
    /// is exclusively borrowed, so `source` can never be the same tree.
    fn clone_from(&mut self, source: &Self) {
        self.root = source.root.clone();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree. Returns `true` if the value was
    /// inserted and `false` if it was already present, in which case the tree
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        Self::insert_node(&mut self.root, value)
    }

    /// Returns `true` if the given value is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Potentially retrieves a reference to the stored value equal to the
    /// given one. If no node holds such a value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        Self::get_node(&self.root, value)
    }

    /// Deletes the given value from the tree. Returns `true` if the value was
    /// present and removed, `false` if the tree never held it.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// smallest value of its right subtree, which keeps the remaining values
    /// in BST order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        Self::delete_node(&mut self.root, value)
    }

    /// Reports the node count and height of the tree in one recursive pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{Tree, TreeInfo};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.info(), TreeInfo { nodes: 0, height: None });
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.info(), TreeInfo { nodes: 1, height: Some(0) });
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.info(), TreeInfo { nodes: 2, height: Some(1) });
    /// ```
    pub fn info(&self) -> TreeInfo {
        let (nodes, levels) = Self::subtree_info(&self.root);
        TreeInfo {
            nodes,
            height: levels.checked_sub(1),
        }
    }

    /// Walks the tree in pre-order (node, left subtree, right subtree),
    /// calling `visit` once per value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.pre_order(|v| seen.push(*v));
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::pre_order_node(&self.root, &mut visit);
    }

    /// Walks the tree in in-order (left subtree, node, right subtree),
    /// calling `visit` once per value. The values are visited in strictly
    /// ascending order regardless of insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].iter().copied().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order(|v| seen.push(*v));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::in_order_node(&self.root, &mut visit);
    }

    /// Walks the tree in post-order (left subtree, right subtree, node),
    /// calling `visit` once per value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].iter().copied().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.post_order(|v| seen.push(*v));
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        Self::post_order_node(&self.root, &mut visit);
    }

    /// Rebuilds the tree to the minimal height for its node count.
    ///
    /// The values are drained into a sorted buffer via an in-order walk,
    /// every existing node is discarded, and the tree is repopulated by
    /// recursively inserting the midpoint of each buffer range. The value set
    /// is unchanged; no node of the old tree survives, even when its value
    /// does.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// // Sequential inserts degrade the tree into a chain of height 6...
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.info().height, Some(6));
    ///
    /// // ...which rebalancing rebuilds into a full tree of height 2.
    /// tree.rebalance();
    /// assert_eq!(tree.info().height, Some(2));
    ///
    /// let mut seen = Vec::new();
    /// tree.in_order(|v| seen.push(*v));
    /// assert_eq!(seen, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let (nodes, _) = Self::subtree_info(&self.root);
        let mut sorted = Vec::with_capacity(nodes);
        Self::drain_in_order(self.root.take(), &mut sorted);

        let mut values = sorted.into_iter();
        self.root = Self::repopulate(&mut values, nodes);
        debug_assert!(values.next().is_none());
    }

    /// Releases every node and resets the tree to empty. A no-op on an
    /// already-empty tree.
    ///
    /// Dropping the tree does the same thing implicitly; `clear` is for
    /// emptying a tree that will be used again.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        // Children are released before their parent as each Box unwinds.
        self.root = None;
    }

    fn insert_node(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        match link {
            None => {
                *link = Some(Node::new_boxed(value));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_node(&mut node.left, value),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert_node(&mut node.right, value),
            },
        }
    }

    fn get_node<'a>(link: &'a Link<T>, value: &T) -> Option<&'a T>
    where
        T: Ord,
    {
        let node = link.as_ref()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::get_node(&node.left, value),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => Self::get_node(&node.right, value),
        }
    }

    fn delete_node(link: &mut Link<T>, value: &T) -> bool
    where
        T: Ord,
    {
        match link {
            None => false,
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::delete_node(&mut node.left, value),
                Ordering::Greater => Self::delete_node(&mut node.right, value),
                Ordering::Equal => {
                    Self::splice_out(link);
                    true
                }
            },
        }
    }

    /// Removes the root node of the subtree at `link`, re-linking its
    /// children so the BST ordering invariant holds.
    fn splice_out(link: &mut Link<T>) {
        let mut node = match link.take() {
            Some(node) => node,
            None => return,
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (left, mut right) => {
                // Two children: the in-order successor (leftmost of the right
                // subtree, which has at most one child itself) takes over
                // this position.
                let mut successor = Self::remove_min(&mut right);
                successor.left = left;
                successor.right = right;
                Some(successor)
            }
        };
    }

    /// Unlinks and returns the smallest node of the subtree at `link`,
    /// replacing it with its right child.
    ///
    /// The caller guarantees the subtree is non-empty.
    fn remove_min(link: &mut Link<T>) -> Box<Node<T>> {
        if let Some(node) = link {
            if node.left.is_some() {
                return Self::remove_min(&mut node.left);
            }
        }
        let mut node = link.take().expect("Caller guarantees a non-empty subtree");
        *link = node.right.take();
        node
    }

    fn subtree_info(link: &Link<T>) -> (usize, usize) {
        match link {
            None => (0, 0),
            Some(node) => {
                let (left_nodes, left_levels) = Self::subtree_info(&node.left);
                let (right_nodes, right_levels) = Self::subtree_info(&node.right);
                (
                    left_nodes + right_nodes + 1,
                    left_levels.max(right_levels) + 1,
                )
            }
        }
    }

    fn pre_order_node<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            visit(&node.value);
            Self::pre_order_node(&node.left, visit);
            Self::pre_order_node(&node.right, visit);
        }
    }

    fn in_order_node<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            Self::in_order_node(&node.left, visit);
            visit(&node.value);
            Self::in_order_node(&node.right, visit);
        }
    }

    fn post_order_node<F>(link: &Link<T>, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = link {
            Self::post_order_node(&node.left, visit);
            Self::post_order_node(&node.right, visit);
            visit(&node.value);
        }
    }

    /// Consumes the subtree at `link`, pushing its values onto `out` in
    /// ascending order. Every visited node is dropped on the way out.
    fn drain_in_order(link: Link<T>, out: &mut Vec<T>) {
        if let Some(node) = link {
            let node = *node;
            Self::drain_in_order(node.left, out);
            out.push(node.value);
            Self::drain_in_order(node.right, out);
        }
    }

    /// Builds a minimal-height subtree from the next `len` values of a
    /// sorted sequence. The midpoint of the range becomes the subtree root,
    /// with the values before it in the left child and the values after it in
    /// the right child.
    fn repopulate(values: &mut vec::IntoIter<T>, len: usize) -> Link<T> {
        if len == 0 {
            return None;
        }
        let left_len = (len - 1) / 2;
        let left = Self::repopulate(values, left_len);
        let value = values
            .next()
            .expect("Buffer holds exactly the counted nodes");
        let right = Self::repopulate(values, len - 1 - left_len);
        Some(Box::new(Node { value, left, right }))
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every yielded value, silently skipping duplicates.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
