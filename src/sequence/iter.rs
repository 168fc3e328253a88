//! Iterators over sequences.

use std::iter::FusedIterator;

use super::Sequence;

/// A borrowing iterator over the elements of a [`Sequence`].
///
/// The iterator is double-ended and knows its exact length. It can be
/// restarted any number of times by calling [`Sequence::iter`] again.
///
/// # Examples
///
/// ```rust
/// use lambars_sequence::sequence::Sequence;
///
/// let sequence = Sequence::from_vec(vec![1, 2, 3]).concat(&Sequence::uniform(2, 9));
/// let collected: Vec<&i32> = sequence.iter().collect();
/// assert_eq!(collected, vec![&1, &2, &3, &9, &9]);
/// assert_eq!(sequence.iter().rev().next(), Some(&9));
/// ```
pub struct SequenceIterator<'a, T> {
    sequence: &'a Sequence<T>,
    front: usize,
    back: usize,
}

impl<'a, T> SequenceIterator<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.len(),
        }
    }
}

impl<T> Clone for SequenceIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for SequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.lookup(self.front);
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, count: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(count).min(self.back);
        self.next()
    }
}

impl<T> DoubleEndedIterator for SequenceIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.lookup(self.back)
    }
}

impl<T> ExactSizeIterator for SequenceIterator<'_, T> {}

impl<T> FusedIterator for SequenceIterator<'_, T> {}

/// An owning iterator over the elements of a [`Sequence`].
///
/// Elements are cloned out of the shared structure.
pub struct SequenceIntoIterator<T> {
    sequence: Sequence<T>,
    front: usize,
    back: usize,
}

impl<T> SequenceIntoIterator<T> {
    pub(crate) fn new(sequence: Sequence<T>) -> Self {
        let back = sequence.len();
        Self {
            sequence,
            front: 0,
            back,
        }
    }
}

impl<T: Clone> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let element = self.sequence.lookup(self.front).cloned();
        self.front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for SequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.lookup(self.back).cloned()
    }
}

impl<T: Clone> ExactSizeIterator for SequenceIntoIterator<T> {}

impl<T: Clone> FusedIterator for SequenceIntoIterator<T> {}
