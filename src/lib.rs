//! # lambars-sequence
//!
//! Persistent, immutable, structurally-shared ordered sequences.
//!
//! ## Overview
//!
//! The crate provides a single sequence type, [`Sequence<T>`](sequence::Sequence),
//! that backs three kinds of value sequences:
//!
//! - **Value sequences**: `Sequence<T>` over arbitrary elements
//! - **Code-point sequences**: [`CodePointSequence`](sequence::CodePointSequence) (`Sequence<char>`)
//! - **Byte sequences**: [`ByteSequence`](sequence::ByteSequence) (`Sequence<u8>`)
//!
//! A sequence is a small tree of nodes. Concatenation, sectioning and
//! reversal only allocate a new node on top of shared children, and
//! [`compact`](sequence::Sequence::compact) rewrites any tree into a
//! contiguous buffer, optionally with a hash index for O(1) average search.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid` implementations (default)
//! - `arc`: thread-safe reference counting with `Arc` (default)
//! - `serde`: `Serialize`/`Deserialize` for sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_sequence::prelude::*;
//!
//! let run = Sequence::uniform(3, 'x');
//! let text = run.concat(&Sequence::from("yz"));
//! assert_eq!(text.len(), 5);
//! assert_eq!(text.to_string(), "xxxyz");
//!
//! let indexed = text.compact(true);
//! assert_eq!(indexed.find(&'y', 0), Ok(Some(3)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lambars_sequence::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    pub use crate::sequence::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub mod sequence;
