//! Algebraic type classes for sequences.
//!
//! - [`Semigroup`]: associative binary operation (`combine`)
//! - [`Monoid`]: semigroup with an identity element (`empty`)
//!
//! [`Sequence`](crate::sequence::Sequence) is a monoid under concatenation
//! with the empty sequence as identity.
//!
//! # Examples
//!
//! ```rust
//! use lambars_sequence::sequence::Sequence;
//! use lambars_sequence::typeclass::{Monoid, Semigroup};
//!
//! let parts = vec![
//!     Sequence::from_vec(vec![1, 2]),
//!     Sequence::uniform(2, 0),
//!     Sequence::from_vec(vec![3]),
//! ];
//! assert_eq!(Sequence::combine_all(parts).to_vec(), vec![1, 2, 0, 0, 3]);
//! assert!(Sequence::<i32>::empty().is_empty());
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
