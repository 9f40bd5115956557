//! Injected orderings for the tree.
//!
//! A [`Comparator`] is a strict weak order: `less(a, b)` must be irreflexive
//! and transitive, and two keys are treated as equal when neither is less
//! than the other. The tree never asks for anything beyond `less`, although
//! implementations may override [`Comparator::compare`] with a cheaper
//! three-way comparison.
//!
//! # Examples
//!
//! ```rust
//! use rbkit::compare::{Comparator, FnComparator, Natural, Reverse};
//! use std::cmp::Ordering;
//!
//! assert!(Natural.less(&1, &2));
//! assert!(Reverse.less(&2, &1));
//!
//! let by_length = FnComparator::new(|left: &&str, right: &&str| left.len() < right.len());
//! assert_eq!(by_length.compare(&"ab", &"cd"), Ordering::Equal);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A strict weak ordering over `T`.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `left` is ordered strictly before `right`.
    fn less(&self, left: &T, right: &T) -> bool;

    /// Three-way comparison derived from [`Comparator::less`].
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if self.less(left, right) {
            Ordering::Less
        } else if self.less(right, left) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The natural ordering given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        left < right
    }

    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// The reverse of the natural ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl<T: Ord + ?Sized> Comparator<T> for Reverse {
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        right < left
    }

    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}

/// Adapts a `less`-style closure into a [`Comparator`].
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F> {
    less: F,
}

impl<F> FnComparator<F> {
    /// Wraps `less`, which must describe a strict weak order.
    pub const fn new(less: F) -> Self {
        Self { less }
    }
}

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, left: &T, right: &T) -> bool {
        (self.less)(left, right)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator")
    }
}
