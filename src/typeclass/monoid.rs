//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;
use crate::sequence::Sequence;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    #[must_use]
    fn empty() -> Self;

    /// Combines all elements, starting from the identity.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }

    /// Returns `true` if this is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<T> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::new()
    }

    /// Joins by balanced halving instead of a left fold.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let parts: Vec<Self> = iterator.into_iter().collect();
        Self::concat_all(&parts)
    }
}
