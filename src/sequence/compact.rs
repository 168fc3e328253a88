//! Compaction into contiguous leaves and the bucket-range hash index.
//!
//! # Bucket-range table
//!
//! A [`HashIndex`] over `n` elements uses `bucket_count = hash_mask(n) + 1`
//! buckets, the smallest power of two not below `n`. The table is laid out
//! as a stable counting sort rather than as linked chains:
//!
//! ```text
//! ranges:    [r0, r1, r2, ..., r(bucket_count)]      bucket h = positions[rh..r(h+1)]
//! positions: [element positions grouped by bucket, ascending inside a bucket]
//! ```
//!
//! Because positions stay in ascending order inside each bucket, a forward
//! search scans a bucket from its low end and a backward search from its
//! high end, and both return the same element a linear scan would.

use std::hash::Hash;

use super::collector::{Buffer, Direction};
use super::hash::element_hash;
use super::node::Node;
use super::{ReferenceCounter, Sequence};

/// Returns the bucket mask for `entry_count` entries.
///
/// The mask is one less than the smallest power of two that is not below
/// `entry_count` (and `0` for zero or one entries).
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::hash_mask;
///
/// assert_eq!(hash_mask(0), 0);
/// assert_eq!(hash_mask(1), 0);
/// assert_eq!(hash_mask(5), 7);
/// assert_eq!(hash_mask(8), 7);
/// assert_eq!(hash_mask(9), 15);
/// ```
#[must_use]
pub const fn hash_mask(entry_count: usize) -> usize {
    if entry_count <= 1 {
        return 0;
    }
    match entry_count.checked_next_power_of_two() {
        Some(power) => power - 1,
        None => usize::MAX,
    }
}

/// A bucket-range table over the positions of a contiguous buffer.
///
/// Obtained from [`Sequence::hash_index`] on a sequence compacted with
/// `compact(true)`. The raw tables are exposed so that a persistence layer
/// can store them next to the elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashIndex {
    ranges: Box<[usize]>,
    positions: Box<[usize]>,
}

impl HashIndex {
    /// Builds the table for `items` using `hasher` for element hashes.
    pub(crate) fn build<T>(items: &[T], hasher: fn(&T) -> u32) -> Self {
        let mask = hash_mask(items.len());
        let bucket_count = mask + 1;

        let buckets: Vec<usize> = items
            .iter()
            .map(|item| hasher(item) as usize & mask)
            .collect();

        let mut ranges = vec![0_usize; bucket_count + 1];
        for &bucket in &buckets {
            ranges[bucket + 1] += 1;
        }
        for bucket in 1..=bucket_count {
            ranges[bucket] += ranges[bucket - 1];
        }

        let mut cursors = ranges[..bucket_count].to_vec();
        let mut positions = vec![0_usize; items.len()];
        for (position, &bucket) in buckets.iter().enumerate() {
            positions[cursors[bucket]] = position;
            cursors[bucket] += 1;
        }

        Self {
            ranges: ranges.into_boxed_slice(),
            positions: positions.into_boxed_slice(),
        }
    }

    /// Returns the number of buckets (a power of two).
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.ranges.len() - 1
    }

    /// Returns the mask that turns an element hash into a bucket.
    #[must_use]
    pub fn mask(&self) -> usize {
        self.bucket_count() - 1
    }

    /// Returns the `bucket_count + 1` range boundaries into
    /// [`positions`](Self::positions).
    #[must_use]
    pub fn ranges(&self) -> &[usize] {
        &self.ranges
    }

    /// Returns the element positions grouped by bucket.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Returns the positions stored in the bucket of `hash`.
    #[must_use]
    pub fn bucket(&self, hash: u32) -> &[usize] {
        let bucket = hash as usize & self.mask();
        &self.positions[self.ranges[bucket]..self.ranges[bucket + 1]]
    }

    /// Scans the bucket of `hash` for `value` inside a window.
    pub(crate) fn find<T: PartialEq>(
        &self,
        items: &[T],
        hash: u32,
        value: &T,
        offset: usize,
        length: usize,
        direction: Direction,
    ) -> Option<usize> {
        let candidates = self.bucket(hash);
        let end = offset + length;
        let matches = |position: &usize| &items[*position] == value;
        match direction {
            Direction::Forward => candidates
                .iter()
                .copied()
                .skip_while(|&position| position < offset)
                .take_while(|&position| position < end)
                .find(matches),
            Direction::Backward => candidates
                .iter()
                .rev()
                .copied()
                .skip_while(|&position| position >= end)
                .take_while(|&position| position >= offset)
                .find(matches),
        }
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Returns the common value if all elements are equal.
    fn uniform_value(&self) -> Option<&T> {
        if self.is_uniform() { self.lookup(0) } else { None }
    }

    /// Rewrites this sequence into a contiguous leaf without an index.
    ///
    /// Sequences whose elements are all equal become run-length leaves;
    /// sequences that already are leaves are returned as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let joined = Sequence::from_vec(vec![1, 2]).concat(&Sequence::from_vec(vec![3]));
    /// let flat = joined.compact_flat();
    /// assert!(flat.is_compacted());
    /// assert_eq!(flat.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn compact_flat(&self) -> Self {
        match self.node() {
            Node::Empty | Node::Uniform { .. } | Node::Indexed { .. } => return self.clone(),
            _ => {}
        }
        if let Some(value) = self.uniform_value() {
            return Self::uniform(self.len(), value.clone());
        }
        if matches!(self.node(), Node::Flat { .. }) {
            return self.clone();
        }
        let length = self.len();
        let mut buffer = Buffer::with_capacity(length);
        self.extract(&mut buffer);
        tracing::trace!(length, "compacted sequence into flat buffer");
        let compacted = Self::from_node(Node::Flat {
            items: buffer.items.into(),
            offset: 0,
            length,
        });
        if let Some(hash) = self.cached_hash() {
            compacted.seed_hash(hash);
        }
        compacted
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Rewrites this sequence into a contiguous leaf.
    ///
    /// With `with_index`, the leaf also carries a [`HashIndex`], making
    /// [`find`](Self::find) O(1) on average. The result always equals
    /// `self`, with the same length and hash code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let sequence: Sequence<u32> = (0..100).collect();
    /// let reversed = sequence.reverse().compact(true);
    /// assert!(reversed.is_indexed());
    /// assert_eq!(reversed.find(&10, 0), Ok(Some(89)));
    /// assert_eq!(reversed, sequence.reverse());
    /// ```
    #[must_use]
    pub fn compact(&self, with_index: bool) -> Self {
        if with_index {
            self.compact_indexed()
        } else {
            self.compact_flat()
        }
    }

    fn compact_indexed(&self) -> Self {
        match self.node() {
            Node::Empty | Node::Uniform { .. } | Node::Indexed { .. } => return self.clone(),
            _ => {}
        }
        if let Some(value) = self.uniform_value() {
            return Self::uniform(self.len(), value.clone());
        }
        let items: ReferenceCounter<[T]> = match self.node() {
            Node::Flat {
                items,
                offset: 0,
                length,
            } if *length == items.len() => ReferenceCounter::clone(items),
            _ => {
                let mut buffer = Buffer::with_capacity(self.len());
                self.extract(&mut buffer);
                buffer.items.into()
            }
        };
        let hasher: fn(&T) -> u32 = element_hash::<T>;
        let index = HashIndex::build(&items, hasher);
        tracing::trace!(
            length = items.len(),
            buckets = index.bucket_count(),
            "built hash index"
        );
        let compacted = Self::from_node(Node::Indexed {
            items,
            index,
            hasher,
        });
        if let Some(hash) = self.cached_hash() {
            compacted.seed_hash(hash);
        }
        compacted
    }

    /// Returns the hash index of an indexed leaf.
    ///
    /// Returns `None` for every other variant, including uniform runs.
    #[must_use]
    pub fn hash_index(&self) -> Option<&HashIndex> {
        match self.node() {
            Node::Indexed { index, .. } => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_groups_positions_in_ascending_order() {
        let items = [10_u32, 11, 12, 13, 14, 15];
        let index = HashIndex::build(&items, |value| *value % 2);
        assert_eq!(index.bucket_count(), 8);
        assert_eq!(index.ranges().len(), 9);
        assert_eq!(index.bucket(0), &[0, 2, 4]);
        assert_eq!(index.bucket(1), &[1, 3, 5]);
        assert!(index.bucket(2).is_empty());
    }

    #[test]
    fn index_find_respects_window_and_direction() {
        let items = [7_u32, 1, 7, 2, 7];
        let index = HashIndex::build(&items, |value| *value);
        assert_eq!(index.find(&items, 7, &7, 0, 5, Direction::Forward), Some(0));
        assert_eq!(index.find(&items, 7, &7, 1, 4, Direction::Forward), Some(2));
        assert_eq!(index.find(&items, 7, &7, 0, 5, Direction::Backward), Some(4));
        assert_eq!(index.find(&items, 7, &7, 0, 4, Direction::Backward), Some(2));
        assert_eq!(index.find(&items, 7, &7, 3, 1, Direction::Forward), None);
        assert_eq!(index.find(&items, 9, &9, 0, 5, Direction::Forward), None);
    }

    #[test]
    fn table_sizes_match_layout() {
        let items: Vec<u64> = (0..100).collect();
        let index = HashIndex::build(&items, element_hash::<u64>);
        assert_eq!(index.bucket_count(), 128);
        assert_eq!(index.positions().len(), 100);
        assert_eq!(index.ranges()[0], 0);
        assert_eq!(index.ranges()[128], 100);
    }
}
