//! Push-based traversal sinks.
//!
//! A [`Collector`] receives the elements of a sequence one by one and
//! decides after each element whether the traversal goes on. Every
//! sequence variant implements its traversal in terms of collectors, so
//! hashing, copying, searching and uniformity checks all share one
//! traversal path.
//!
//! # Examples
//!
//! ```rust
//! use lambars_sequence::sequence::{Direction, Sequence, collector};
//!
//! let sequence = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
//!
//! let mut seen = Vec::new();
//! let completed = sequence
//!     .extract_range(
//!         &mut collector::from_fn(|value: &i32| {
//!             seen.push(*value);
//!             *value != 3
//!         }),
//!         1,
//!         4,
//!         Direction::Backward,
//!     )
//!     .unwrap();
//!
//! assert!(!completed);
//! assert_eq!(seen, vec![5, 4, 3]);
//! ```

use super::hash::{HashAccumulator, element_hash};
use std::hash::Hash;

/// A sink for the elements of a traversal.
pub trait Collector<T: ?Sized> {
    /// Accepts the next element.
    ///
    /// Returns `true` to continue the traversal or `false` to abort it.
    fn push(&mut self, value: &T) -> bool;
}

impl<T: ?Sized, C: Collector<T> + ?Sized> Collector<T> for &mut C {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        (**self).push(value)
    }
}

/// The order in which a traversal visits a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// From the lowest index to the highest.
    #[default]
    Forward,
    /// From the highest index to the lowest.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Returns `true` for [`Direction::Forward`].
    #[inline]
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// A collector backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F> {
    function: F,
}

/// Creates a collector that calls `function` for each element.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::{Sequence, collector};
///
/// let sequence = Sequence::from_vec(vec![1, 2, 3]);
/// let mut total = 0;
/// assert!(sequence.extract(&mut collector::from_fn(|value: &i32| {
///     total += value;
///     true
/// })));
/// assert_eq!(total, 6);
/// ```
pub const fn from_fn<T: ?Sized, F: FnMut(&T) -> bool>(function: F) -> FromFn<F> {
    FromFn { function }
}

impl<T: ?Sized, F: FnMut(&T) -> bool> Collector<T> for FromFn<F> {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        (self.function)(value)
    }
}

// =============================================================================
// Internal collectors
// =============================================================================

/// Feeds element hashes into the rolling sequence hash.
pub(crate) struct HashCollector {
    pub(crate) accumulator: HashAccumulator,
}

impl HashCollector {
    pub(crate) const fn new() -> Self {
        Self {
            accumulator: HashAccumulator::new(),
        }
    }
}

impl<T: Hash> Collector<T> for HashCollector {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        self.accumulator.push(element_hash(value));
        true
    }
}

/// Clones every element into a buffer.
pub(crate) struct Buffer<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Buffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T: Clone> Collector<T> for Buffer<T> {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        self.items.push(value.clone());
        true
    }
}

/// Clones elements into a slice starting at `position`.
pub(crate) struct SliceWriter<'a, T> {
    pub(crate) target: &'a mut [T],
    pub(crate) position: usize,
}

impl<T: Clone> Collector<T> for SliceWriter<'_, T> {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        match self.target.get_mut(self.position) {
            Some(slot) => {
                slot.clone_from(value);
                self.position += 1;
                true
            }
            None => false,
        }
    }
}

/// Aborts on the first element that differs from `value`.
pub(crate) struct UniformCheck<'a, T> {
    pub(crate) value: &'a T,
}

impl<T: PartialEq> Collector<T> for UniformCheck<'_, T> {
    #[inline]
    fn push(&mut self, value: &T) -> bool {
        self.value == value
    }
}
