//! Pluggable comparison contracts used by the [`List`](crate::List) family for value lookups.

use std::cmp::Ordering;

/// Total three-way ordering contract.
///
/// Returns [`Ordering::Less`], [`Ordering::Equal`], or [`Ordering::Greater`] for two values of
/// `T`. No container operation in this crate consumes it; the contract is kept available for
/// ordering-aware extensions.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a [`Comparer`].
///
/// # Examples
///
/// ```
/// use lsq::Comparer;
/// use std::cmp::Ordering;
///
/// let by_length = |lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len());
///
/// assert_eq!(by_length.compare(&"abc", &"xy"), Ordering::Greater);
/// ```
pub trait Comparer<T: ?Sized> {
    /// Compares `lhs` to `rhs` and returns their ordering.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for F {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// Boolean equivalence contract.
///
/// Decides whether two values of `T` are considered equal for lookup purposes. Implementations
/// must be reflexive and symmetric; containers do not enforce transitivity, though well-behaved
/// comparers are expected to provide it.
///
/// Any `Fn(&T, &T) -> bool` closure is an [`EqualityComparer`].
///
/// # Examples
///
/// ```
/// use lsq::EqualityComparer;
///
/// let case_insensitive = |lhs: &String, rhs: &String| lhs.eq_ignore_ascii_case(rhs);
///
/// assert!(case_insensitive.equivalent(&"Cat".to_string(), &"cAT".to_string()));
/// ```
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `lhs` and `rhs` are considered equal.
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> EqualityComparer<T> for F {
    #[inline]
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// Equality comparer deferring to native [`PartialEq`] equality.
///
/// This is the implicit comparer of a [`List`](crate::List) constructed without one.
///
/// # Examples
///
/// ```
/// use lsq::{DefaultEqualityComparer, EqualityComparer};
///
/// assert!(DefaultEqualityComparer.equivalent(&17, &17));
/// assert!(!DefaultEqualityComparer.equivalent(&17, &29));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEqualityComparer;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEqualityComparer {
    #[inline]
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}
