//! Pluggable orderings for [`Tree`][crate::tree::Tree].
//!
//! A [`Tree`][crate::tree::Tree] decides where every value lives by three-way
//! comparison. By default that comparison is the element's own [`Ord`]
//! implementation (see [`Natural`]), but any [`Comparator`] can be injected
//! instead. This supports element types with no intrinsic ordering as well as
//! non-default orderings of types that have one.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{FromFn, Tree};
//!
//! // Order values largest-first.
//! let mut tree = Tree::with_comparator(FromFn(|a: &i32, b: &i32| b.cmp(a)));
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! let descending: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(descending, [3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: comparing the same pair of values must
/// always produce the same result while a tree holds them, and the order must
/// be total (every pair compares as `Less`, `Equal`, or `Greater` with the
/// usual antisymmetry and transitivity). A comparator that violates this
/// can't corrupt memory but will make the tree lose track of values.
pub trait Comparator<T> {
    /// Three-way comparison of `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural ordering: compares values with their [`Ord`] implementation.
///
/// This is the default comparator of a [`Tree`][crate::tree::Tree].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a plain comparison function into a [`Comparator`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use ordered_tree::{Comparator, FromFn};
///
/// // Case-insensitive ordering for strings.
/// let cmp = FromFn(|a: &String, b: &String| {
///     a.to_lowercase().cmp(&b.to_lowercase())
/// });
/// assert_eq!(cmp.compare(&"ABC".to_string(), &"abc".to_string()), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(pub F);

impl<T, F> Comparator<T> for FromFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
