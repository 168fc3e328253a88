//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use crate::sequence::Sequence;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::Sequence;
/// use lambars_sequence::typeclass::Semigroup;
///
/// let left = Sequence::from_vec(vec!['a', 'b']);
/// let right = Sequence::from_vec(vec!['c']);
/// assert_eq!(left.combine(right).to_vec(), vec!['a', 'b', 'c']);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<T> Semigroup for Sequence<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.concat(other)
    }
}
