//! Persistent (immutable) structurally-shared sequences.
//!
//! This module provides [`Sequence`], an immutable ordered sequence that
//! supports O(1) concatenation, sectioning and reversal by sharing the
//! structure of its operands.
//!
//! # Overview
//!
//! A sequence is a tree of nodes:
//!
//! - **Leaves** own their data: uniform runs (one value repeated), flat
//!   buffers and hash-indexed buffers.
//! - **Views** reinterpret another sequence: sections (windows) and
//!   reversals. Views never nest: a section of a section, or a reversal of
//!   a reversal, collapses into a single view.
//! - **Concat nodes** join two sequences and rebalance themselves by a
//!   cheap shape metric, so access depth stays bounded.
//!
//! [`Sequence::compact`] rewrites any tree into a single leaf, optionally
//! with a bucket-range hash index for O(1) average [`Sequence::find`].
//!
//! # Element Kinds
//!
//! - Value sequences: `Sequence<T>`; [`Sequence::try_from_options`] rejects
//!   missing elements.
//! - [`CodePointSequence`]: `Sequence<char>` with text encodings.
//! - [`ByteSequence`]: `Sequence<u8>` with hex and integer encodings.
//!
//! # Examples
//!
//! ```rust
//! use lambars_sequence::sequence::Sequence;
//!
//! let left = Sequence::uniform(3, "x");
//! let right = Sequence::uniform(2, "y");
//! let joined = left.concat(&right);
//!
//! assert_eq!(joined.len(), 5);
//! assert_eq!(joined.get(2), Ok(&"x"));
//! assert_eq!(joined.get(3), Ok(&"y"));
//! assert!(!joined.is_uniform());
//!
//! // Structural sharing: the operands are unchanged
//! assert_eq!(left.len(), 3);
//! assert_eq!(joined.section(1, 3).unwrap().to_vec(), vec!["x", "x", "y"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which lets sequences cross threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`, which is
/// faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

mod binary;
pub mod collector;
mod compact;
mod concat;
mod error;
mod hash;
mod iter;
mod node;
mod string;
mod view;

pub use binary::{ByteSequence, Endian};
pub use collector::{Collector, Direction};
pub use compact::{HashIndex, hash_mask};
pub use error::SequenceError;
pub use iter::{SequenceIntoIterator, SequenceIterator};
pub use string::CodePointSequence;
pub use view::{ListView, SequenceMap};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use collector::{HashCollector, SliceWriter, UniformCheck};
use hash::HashCache;
use node::Node;

struct Inner<T> {
    node: Node<T>,
    hash: HashCache,
}

/// A persistent (immutable) ordered sequence with structural sharing.
///
/// Cloning a `Sequence` only copies a pointer. Every operation returns a
/// new sequence and leaves its operands untouched.
///
/// # Time Complexity
///
/// | Operation       | Complexity                          |
/// |-----------------|-------------------------------------|
/// | `len`           | O(1)                                |
/// | `get`           | O(depth), depth ~ O(log n) amortized |
/// | `concat`        | O(depth)                            |
/// | `section`       | O(depth)                            |
/// | `reverse`       | O(1)                                |
/// | `compact`       | O(n)                                |
/// | `find` (indexed)| O(1) average                        |
/// | `find` (other)  | O(n)                                |
/// | `hash_code`     | O(n) once, O(1) after               |
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::Sequence;
///
/// let sequence: Sequence<i32> = (1..=5).collect();
/// let reversed = sequence.reverse();
/// assert_eq!(reversed.to_vec(), vec![5, 4, 3, 2, 1]);
/// assert_eq!(reversed.reverse(), sequence);
/// ```
pub struct Sequence<T> {
    inner: ReferenceCounter<Inner<T>>,
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SequenceMap<String, u8>: Send, Sync);

impl<T> Clone for Sequence<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T> Sequence<T> {
    #[inline]
    pub(crate) fn from_node(node: Node<T>) -> Self {
        Self {
            inner: ReferenceCounter::new(Inner {
                node,
                hash: HashCache::new(),
            }),
        }
    }

    #[inline]
    pub(crate) fn node(&self) -> &Node<T> {
        &self.inner.node
    }

    pub(crate) fn cached_hash(&self) -> Option<u32> {
        self.inner.hash.peek()
    }

    pub(crate) fn seed_hash(&self, hash: u32) {
        self.inner.hash.seed(hash);
    }

    /// Creates the empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_node(Node::Empty)
    }

    /// Creates a sequence of `length` copies of `value`.
    ///
    /// The value is stored once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let run = Sequence::uniform(1_000_000, 0_u8);
    /// assert_eq!(run.len(), 1_000_000);
    /// assert_eq!(run.get(999_999), Ok(&0));
    /// ```
    #[must_use]
    pub fn uniform(length: usize, value: T) -> Self {
        if length == 0 {
            return Self::new();
        }
        Self::from_node(Node::Uniform { value, length })
    }

    /// Creates a sequence that takes ownership of `items` without copying.
    #[must_use]
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::new(),
            1 => items.pop().map_or_else(Self::new, |value| Self::uniform(1, value)),
            length => Self::from_node(Node::Flat {
                items: items.into(),
                offset: 0,
                length,
            }),
        }
    }

    /// Creates a sequence over a shared buffer without copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::{ReferenceCounter, Sequence};
    ///
    /// let buffer: ReferenceCounter<[i32]> = ReferenceCounter::from(vec![1, 2, 3]);
    /// let first = Sequence::from_shared(ReferenceCounter::clone(&buffer));
    /// let second = Sequence::from_shared(buffer);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn from_shared(items: ReferenceCounter<[T]>) -> Self {
        if items.is_empty() {
            return Self::new();
        }
        let length = items.len();
        Self::from_node(Node::Flat {
            items,
            offset: 0,
            length,
        })
    }

    /// Creates a value sequence, rejecting missing elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NullElement`] with the position of the first
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::{Sequence, SequenceError};
    ///
    /// assert_eq!(
    ///     Sequence::try_from_options(vec![Some(1), None, Some(3)]),
    ///     Err(SequenceError::NullElement { index: 1 })
    /// );
    /// assert_eq!(
    ///     Sequence::try_from_options(vec![Some(1), Some(2)]).map(|sequence| sequence.to_vec()),
    ///     Ok(vec![1, 2])
    /// );
    /// ```
    pub fn try_from_options<I>(items: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.ok_or(SequenceError::NullElement { index }))
            .collect::<Result<Vec<T>, _>>()
            .map(Self::from_vec)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.node.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.lookup(index).ok_or(SequenceError::OutOfBounds {
            index,
            length: self.len(),
        })
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.lookup(0)
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.lookup(index))
    }

    /// Returns the concatenation of `self` and `other`.
    ///
    /// Concatenating with an empty sequence returns the other operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let left = Sequence::from_vec(vec![1, 2]);
    /// let right = Sequence::from_vec(vec![3]);
    /// assert_eq!(left.concat(&right).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(left.concat(&Sequence::new()), left);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::join(self, other)
    }

    /// Returns the elements in opposite order.
    ///
    /// Reversing twice returns the original instance.
    #[must_use]
    pub fn reverse(&self) -> Self {
        if self.len() < 2 {
            return self.clone();
        }
        match self.node() {
            Node::Reverse { base } => base.clone(),
            Node::Uniform { .. } => self.clone(),
            _ => Self::from_node(Node::Reverse { base: self.clone() }),
        }
    }

    /// Pushes every element into `target`, first to last.
    ///
    /// Returns `false` if the collector aborted the traversal.
    pub fn extract<C: Collector<T> + ?Sized>(&self, target: &mut C) -> bool {
        self.extract_window(target, 0, self.len(), Direction::Forward)
    }

    /// Pushes the elements of a window into `target` in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the window exceeds the
    /// sequence.
    pub fn extract_range<C: Collector<T> + ?Sized>(
        &self,
        target: &mut C,
        offset: usize,
        length: usize,
        direction: Direction,
    ) -> Result<bool, SequenceError> {
        self.check_window(offset, length)?;
        Ok(self.extract_window(target, offset, length, direction))
    }

    /// Folds the elements first to last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::uniform(4, 3).concat(&Sequence::uniform(1, 10));
    /// assert_eq!(sequence.fold(0, |total, value| total + value), 22);
    /// ```
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Returns a borrowing iterator, first to last.
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<'_, T> {
        SequenceIterator::new(self)
    }

    /// Returns a read-only list view.
    #[must_use]
    pub const fn as_list(&self) -> ListView<'_, T> {
        ListView::new(self)
    }

    /// Returns `true` if all elements are equal (also for empty sequences).
    #[must_use]
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        match self.node() {
            Node::Empty | Node::Uniform { .. } => true,
            Node::Reverse { base } => base.is_uniform(),
            _ => self
                .lookup(0)
                .is_none_or(|value| self.extract(&mut UniformCheck { value })),
        }
    }

    /// Returns `true` if [`find`](Self::find) on this sequence only touches
    /// indexed leaves or uniform runs.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        match self.node() {
            Node::Empty | Node::Uniform { .. } | Node::Indexed { .. } => true,
            Node::Flat { .. } => false,
            Node::Section { base, .. } | Node::Reverse { base } => base.is_indexed(),
            Node::Concat { left, right, .. } => left.is_indexed() && right.is_indexed(),
        }
    }

    /// Returns `true` if this sequence is a single leaf.
    #[must_use]
    pub fn is_compacted(&self) -> bool {
        matches!(
            self.node(),
            Node::Empty | Node::Uniform { .. } | Node::Flat { .. } | Node::Indexed { .. }
        )
    }

    /// Compares two sequences lexicographically with `compare`, then by
    /// length.
    pub fn compare_with<F>(&self, other: &Self, mut compare: F) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }

    fn check_window(&self, offset: usize, length: usize) -> Result<(), SequenceError> {
        match offset.checked_add(length) {
            Some(end) if end <= self.len() => Ok(()),
            _ => Err(SequenceError::invalid("window exceeds sequence")),
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence from a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }

    /// Creates a sequence from a copy of `length` elements of `items`
    /// starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the window exceeds
    /// `items`.
    pub fn from_slice_range(
        items: &[T],
        offset: usize,
        length: usize,
    ) -> Result<Self, SequenceError> {
        offset
            .checked_add(length)
            .and_then(|end| items.get(offset..end))
            .map(Self::from_slice)
            .ok_or(SequenceError::invalid("window exceeds source buffer"))
    }

    /// Returns `length` elements starting at `offset`.
    ///
    /// Returns `self` when the window spans the whole sequence and the
    /// empty sequence when `length == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `offset + length`
    /// exceeds the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::{Sequence, SequenceError};
    ///
    /// let sequence: Sequence<i32> = (0..10).collect();
    /// assert_eq!(sequence.section(2, 3).unwrap().to_vec(), vec![2, 3, 4]);
    /// assert!(sequence.section(0, 10).unwrap().ptr_eq(&sequence));
    /// assert!(matches!(
    ///     sequence.section(8, 3),
    ///     Err(SequenceError::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn section(&self, offset: usize, length: usize) -> Result<Self, SequenceError> {
        if offset == 0 && length == self.len() {
            return Ok(self.clone());
        }
        self.check_window(offset, length)?;
        Ok(self.slice(offset, length))
    }

    /// Returns the elements from `offset` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `offset > len()`.
    pub fn section_from(&self, offset: usize) -> Result<Self, SequenceError> {
        let length = self
            .len()
            .checked_sub(offset)
            .ok_or(SequenceError::invalid("offset exceeds sequence"))?;
        self.section(offset, length)
    }

    /// Copies all elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut buffer = collector::Buffer::with_capacity(self.len());
        self.extract(&mut buffer);
        buffer.items
    }

    /// Copies all elements into `target` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `target` is shorter
    /// than `offset + len()`.
    pub fn extract_into(&self, target: &mut [T], offset: usize) -> Result<(), SequenceError> {
        match offset.checked_add(self.len()) {
            Some(end) if end <= target.len() => {
                self.extract(&mut SliceWriter {
                    target,
                    position: offset,
                });
                Ok(())
            }
            _ => Err(SequenceError::invalid("target buffer too short")),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first `value` at or after `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `offset > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let sequence = Sequence::from_vec(vec!['a', 'b', 'a', 'c']);
    /// assert_eq!(sequence.find(&'a', 0), Ok(Some(0)));
    /// assert_eq!(sequence.find(&'a', 1), Ok(Some(2)));
    /// assert_eq!(sequence.find(&'z', 0), Ok(None));
    /// assert_eq!(sequence.find(&'a', 4), Ok(None));
    /// ```
    pub fn find(&self, value: &T, offset: usize) -> Result<Option<usize>, SequenceError> {
        let length = self
            .len()
            .checked_sub(offset)
            .ok_or(SequenceError::invalid("offset exceeds sequence"))?;
        Ok(self.find_window(value, offset, length, Direction::Forward))
    }

    /// Returns the position of the last `value`.
    #[must_use]
    pub fn find_last(&self, value: &T) -> Option<usize> {
        self.find_window(value, 0, self.len(), Direction::Backward)
    }

    /// Returns the position of the first occurrence of `needle` at or after
    /// `offset`.
    ///
    /// An empty needle is found at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `offset > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let left = Sequence::from_vec(vec![1, 2, 3]);
    /// let right = Sequence::from_vec(vec![4, 2, 3]);
    /// let joined = left.concat(&right);
    /// let needle = Sequence::from_vec(vec![3, 4]);
    /// assert_eq!(joined.find_sequence(&needle, 0), Ok(Some(2)));
    /// assert_eq!(joined.find_sequence(&Sequence::from_vec(vec![2, 3]), 2), Ok(Some(4)));
    /// ```
    pub fn find_sequence(&self, needle: &Self, offset: usize) -> Result<Option<usize>, SequenceError> {
        if needle.len() == 1 {
            if let Some(value) = needle.first() {
                return self.find(value, offset);
            }
        }
        let remaining = self
            .len()
            .checked_sub(offset)
            .ok_or(SequenceError::invalid("offset exceeds sequence"))?;
        if needle.is_empty() {
            return Ok(Some(offset));
        }
        if needle.len() > remaining {
            return Ok(None);
        }
        let Some(head) = needle.first() else {
            return Ok(None);
        };
        let last_start = self.len() - needle.len();
        let mut start = offset;
        while start <= last_start {
            match self.find_window(head, start, last_start - start + 1, Direction::Forward) {
                Some(candidate) if self.matches_at(needle, candidate) => return Ok(Some(candidate)),
                Some(candidate) => start = candidate + 1,
                None => return Ok(None),
            }
        }
        Ok(None)
    }

    /// Returns `true` if `value` occurs in the sequence.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find_window(value, 0, self.len(), Direction::Forward)
            .is_some()
    }
}

impl<T: Hash> Sequence<T> {
    /// Returns the memoized hash code.
    ///
    /// The hash only depends on the elements, never on the tree shape, and
    /// is never zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let flat = Sequence::from_vec(vec![1, 2, 3, 4]);
    /// let joined = Sequence::from_vec(vec![1, 2]).concat(&Sequence::from_vec(vec![3, 4]));
    /// assert_eq!(flat.hash_code(), joined.hash_code());
    /// assert_ne!(flat.hash_code(), 0);
    /// ```
    pub fn hash_code(&self) -> u32 {
        self.inner.hash.get_or_compute(|| {
            let mut hasher = HashCollector::new();
            self.extract(&mut hasher);
            hasher.accumulator.finish()
        })
    }
}

impl<T> Sequence<T> {
    /// Returns `true` if both sequences are the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Sequence<Sequence<T>> {
    /// Interprets a two-element sequence `[keys, values]` as a map view.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] unless the sequence has
    /// exactly two elements of equal length.
    pub fn to_map(&self) -> Result<SequenceMap<T, T>, SequenceError> {
        match (self.len(), self.lookup(0), self.lookup(1)) {
            (2, Some(keys), Some(values)) => SequenceMap::new(keys.clone(), values.clone()),
            _ => Err(SequenceError::invalid("map encoding needs exactly keys and values")),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: PartialEq + Hash> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        if self.hash_code() != other.hash_code() {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq + Hash> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<T: PartialOrd + Hash> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord + Hash> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator::new(self)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            items.push(element);
        }
        Ok(Sequence::from_vec(items))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
