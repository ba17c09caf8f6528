//! An ordered set backed by a plain (unbalanced) Binary Search Tree.
//!
//! The tree owns its nodes top-down: the tree owns the root and every node
//! owns its children, so there are no parent pointers and no shared
//! ownership anywhere. Mutation happens in place.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // Inserting reports whether the value was new.
//! assert!(tree.insert(1));
//! assert!(!tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Deleting reports whether the value was present.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural};

/// An empty child position is `None`; a present subtree is a boxed root node.
type Subtree<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordered set backed by a Binary Search Tree. This can be used for
/// inserting, finding, and deleting values, and for iterating over the stored
/// values in ascending order.
///
/// The tree does no rebalancing, so every operation costs `O(height)`
/// comparisons where `height` can degrade to `O(len)` for unlucky (e.g.
/// sorted) insertion orders.
///
/// Values are compared with the tree's [`Comparator`] - [`Natural`] (the
/// element's [`Ord`]) unless one was injected via
/// [`with_comparator`][Tree::with_comparator]. Two values comparing equal are
/// the same element as far as the tree is concerned: it never stores both.
pub struct Tree<T, C = Natural> {
    root: Subtree<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` drops its children recursively, which for a
        // degenerate chain-shaped tree is `O(len)` stack frames. Unlink the
        // children first so every node is dropped childless.
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Clone, C: Clone> Clone for Tree<T, C> {
    fn clone(&self) -> Self {
        // Same depth concern as `drop`: a node-by-node recursive clone is
        // `O(height)` stack frames. Build the copy link by link with an
        // explicit stack of (source node, destination link) pairs instead.
        let mut root = None;
        let mut stack = Vec::new();
        if let Some(src) = &self.root {
            stack.push((src.as_ref(), &mut root));
        }
        while let Some((src, dst)) = stack.pop() {
            *dst = Some(Box::new(Node::new(src.value.clone())));
            if let Some(node) = dst {
                if let Some(left) = &src.left {
                    stack.push((left.as_ref(), &mut node.left));
                }
                if let Some(right) = &src.right {
                    stack.push((right.as_ref(), &mut node.right));
                }
            }
        }
        Self {
            root,
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{FromFn, Tree};
    ///
    /// let mut tree = Tree::with_comparator(FromFn(|a: &i32, b: &i32| b.cmp(a)));
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// // The tree's order is the comparator's order: largest first.
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits the stored values in ascending order (per the tree's
    /// comparator). Each call starts a fresh traversal; the iterator borrows
    /// the tree but keeps no state in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [100, 50, 150, 101, 141] {
    ///     tree.insert(x);
    /// }
    ///
    /// let in_order: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(in_order, [50, 100, 101, 141, 150]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts the given value into the tree and returns `true`, unless a
    /// value comparing equal is already stored, in which case the tree is
    /// left untouched (no allocation, no overwrite) and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let cmp = &self.cmp;
        let mut current = &mut self.root;
        while let Some(node) = current {
            match cmp.compare(&value, &node.value) {
                Ordering::Less => current = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => current = &mut node.right,
            }
        }
        *current = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Whether a value comparing equal to the given value is stored in the
    /// tree. Searching an empty tree returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match self.cmp.compare(value, &node.value) {
                Ordering::Less => current = &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => current = &node.right,
            }
        }
        false
    }

    /// Deletes the value comparing equal to the given value from the tree
    /// and returns `true`. If no such value is stored, the tree is left
    /// untouched and `false` is returned - deleting an absent value is a
    /// no-op, not an error.
    ///
    /// Every other stored value survives a deletion, and the tree's ordering
    /// invariant holds afterwards no matter where the deleted node sat (leaf,
    /// single child, two children, or the root itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool {
        // Walk the chain of child links to the link holding the target, then
        // replace that link's subtree with the spliced one. The root is just
        // the first link, so it needs no special casing. Like `insert`, the
        // walk is a loop rather than recursion: without rebalancing the tree
        // can be as tall as `len`, and a recursive descent would overflow
        // the stack on trees that deep.
        let cmp = &self.cmp;
        let mut current = &mut self.root;
        loop {
            // Peek at the ordering through a shared borrow so `current` is
            // free to be taken or rewired in the `Equal` arm below.
            let ordering = match &*current {
                Some(node) => cmp.compare(value, &node.value),
                // Ran off the tree: the value isn't stored.
                None => return false,
            };
            match ordering {
                Ordering::Less => {
                    let link = current;
                    current = &mut link.as_mut().unwrap().left;
                }
                Ordering::Greater => {
                    let link = current;
                    current = &mut link.as_mut().unwrap().right;
                }
                Ordering::Equal => {
                    let node = current.take().unwrap();
                    *current = splice(node);
                    self.len -= 1;
                    return true;
                }
            }
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Removes `node` from its position and returns what should stand there
/// instead.
fn splice<T>(mut node: Box<Node<T>>) -> Subtree<T> {
    match (node.left.take(), node.right.take()) {
        // A leaf: the position becomes empty.
        (None, None) => None,
        // One child: the child subtree stands in for the node.
        (Some(child), None) | (None, Some(child)) => Some(child),
        // Two children: the node's value is replaced by its in-order
        // successor - the leftmost value of the right subtree - which is
        // detached from down there and moved up here. The node itself stays
        // put, so neither child pointer above it needs touching.
        (left, Some(right)) => {
            let (successor, right) = detach_min(right);
            node.value = successor;
            node.left = left;
            node.right = right;
            Some(node)
        }
    }
}

/// Detaches the minimum value of the subtree rooted at `node`, returning it
/// along with the remaining subtree. The minimum node has no left child by
/// construction, so removing it is always a leaf or single-child splice.
fn detach_min<T>(mut node: Box<Node<T>>) -> (T, Subtree<T>) {
    // Walk to the link holding the leftmost node. A loop for the same reason
    // as `delete`: the left spine can be as long as the subtree.
    // `node` has no left child, so it is the minimum itself.
    if node.left.is_none() {
        let node = *node;
        return (node.value, node.right);
    }
    let mut link = &mut node.left;
    loop {
        // Peek through a shared borrow so `link` stays free to be taken and
        // rewired once the leftmost node is found.
        if link.as_ref().unwrap().left.is_some() {
            let l = link;
            link = &mut l.as_mut().unwrap().left;
        } else {
            let min = *link.take().unwrap();
            *link = min.right;
            return (min.value, Some(node));
        }
    }
}

/// An in-order (ascending) iterator over a [`Tree`]'s values.
///
/// Holds the path from the root to the next value to yield, so it uses
/// `O(height)` space and no recursion.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Subtree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Stacks `subtree`'s root and every node on its leftmost path. The node
    /// pushed last holds the smallest value of `subtree`.
    fn push_left_spine(&mut self, mut subtree: &'a Subtree<T>) {
        while let Some(node) = subtree {
            self.stack.push(node.as_ref());
            subtree = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Everything smaller than `node.value` has been yielded; the next
        // values up are in `node`'s right subtree.
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values as the model.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    assert_eq!(tree.insert(v.clone()), set.insert(v.clone()));
                }
                Op::Remove(v) => {
                    assert_eq!(tree.delete(v), set.remove(v));
                }
                Op::Contains(v) => {
                    assert_eq!(tree.contains(v), set.contains(v));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for &x in &xs {
                tree.insert(x);
            }

            let expected: BTreeSet<i8> = xs.iter().copied().collect();
            tree.iter().eq(expected.iter())
        }
    }
}
