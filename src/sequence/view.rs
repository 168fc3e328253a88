//! Read-only list and map views over sequences.
//!
//! [`ListView`] offers the vocabulary of a random-access list on top of a
//! borrowed sequence. [`SequenceMap`] pairs a key sequence with a value
//! sequence of the same length and looks keys up through
//! [`Sequence::find`], which is hash-assisted when the keys were compacted
//! with an index.

use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use super::collector::Direction;
use super::{Sequence, SequenceError, SequenceIterator};

/// A read-only, random-access list view of a [`Sequence`].
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::Sequence;
///
/// let sequence = Sequence::from_vec(vec!["a", "b", "a"]);
/// let list = sequence.as_list();
/// assert_eq!(list.index_of(&"a"), Some(0));
/// assert_eq!(list.last_index_of(&"a"), Some(2));
/// assert_eq!(list[1], "b");
/// ```
pub struct ListView<'a, T> {
    sequence: &'a Sequence<T>,
}

impl<'a, T> ListView<'a, T> {
    pub(crate) const fn new(sequence: &'a Sequence<T>) -> Self {
        Self { sequence }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.sequence.lookup(index)
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> SequenceIterator<'a, T> {
        self.sequence.iter()
    }

    /// Returns the underlying sequence.
    #[must_use]
    pub const fn sequence(&self) -> &'a Sequence<T> {
        self.sequence
    }
}

impl<T: PartialEq> ListView<'_, T> {
    /// Returns the position of the first occurrence of `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.sequence
            .find_window(value, 0, self.len(), Direction::Forward)
    }

    /// Returns the position of the last occurrence of `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.sequence.find_last(value)
    }

    /// Returns `true` if `value` occurs in the list.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.sequence.contains(value)
    }
}

impl<T: Clone> ListView<'_, T> {
    /// Returns the elements in `from..to` as a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `from > to` or `to`
    /// exceeds the list.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Sequence<T>, SequenceError> {
        let length = to
            .checked_sub(from)
            .ok_or(SequenceError::invalid("sub list bounds are reversed"))?;
        self.sequence.section(from, length)
    }
}

impl<T> Index<usize> for ListView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.sequence.lookup(index) {
            Some(element) => element,
            None => panic!(
                "index {index} out of bounds for length {}",
                self.sequence.len()
            ),
        }
    }
}

impl<'a, T> IntoIterator for &ListView<'a, T> {
    type Item = &'a T;
    type IntoIter = SequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListView<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// SequenceMap
// =============================================================================

/// A read-only map view over a pair of equal-length sequences.
///
/// The key at position `i` maps to the value at position `i`. If a key
/// occurs more than once, the first occurrence wins.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::SequenceMap;
///
/// let map = SequenceMap::from_entries(vec![("one", 1), ("two", 2), ("three", 3)]);
/// assert_eq!(map.get(&"two"), Some(&2));
/// assert_eq!(map.get(&"four"), None);
/// assert!(map.contains_value(&3));
/// assert!(map.keys().is_indexed());
/// ```
pub struct SequenceMap<K, V> {
    keys: Sequence<K>,
    values: Sequence<V>,
}

impl<K, V> Clone for SequenceMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K, V> SequenceMap<K, V> {
    /// Pairs `keys` with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if the lengths differ.
    pub fn new(keys: Sequence<K>, values: Sequence<V>) -> Result<Self, SequenceError> {
        if keys.len() != values.len() {
            return Err(SequenceError::invalid("keys and values differ in length"));
        }
        Ok(Self { keys, values })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key sequence.
    #[must_use]
    pub const fn keys(&self) -> &Sequence<K> {
        &self.keys
    }

    /// Returns the value sequence.
    #[must_use]
    pub const fn values(&self) -> &Sequence<V> {
        &self.values
    }

    /// Returns an iterator over `(key, value)` pairs in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Returns the key and value sequences.
    #[must_use]
    pub fn into_parts(self) -> (Sequence<K>, Sequence<V>) {
        (self.keys, self.values)
    }
}

impl<K: PartialEq, V> SequenceMap<K, V> {
    /// Returns the value of the first entry whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.keys
            .find_window(key, 0, self.len(), Direction::Forward)
            .and_then(|index| self.values.lookup(index))
    }

    /// Returns `true` if some entry has the key `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains(key)
    }
}

impl<K, V: PartialEq> SequenceMap<K, V> {
    /// Returns `true` if some entry has the value `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.values.contains(value)
    }
}

impl<K: Clone + Eq + Hash, V: Clone + PartialEq> SequenceMap<K, V> {
    /// Builds a map from entries; the keys are compacted with a hash index.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let (keys, values): (Vec<K>, Vec<V>) = entries.into_iter().unzip();
        Self {
            keys: Sequence::from_vec(keys).compact(true),
            values: Sequence::from_vec(values).compact_flat(),
        }
    }
}

impl<T> SequenceMap<T, T> {
    /// Encodes the map as the two-element sequence `[keys, values]`.
    ///
    /// This is the inverse of [`Sequence::to_map`].
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<Sequence<T>> {
        Sequence::from_vec(vec![self.keys.clone(), self.values.clone()])
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SequenceMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
