//! Sequence node variants and their window-based traversal.
//!
//! Every operation below works on an `(offset, length)` window given in the
//! receiving node's own coordinates. Composite nodes translate the window
//! into their children's coordinates; leaves finally touch the data. The
//! facade in `mod.rs` validates windows, so these functions assume
//! `offset + length <= len()`.

use super::Sequence;
use super::collector::{Collector, Direction};
use super::compact::HashIndex;
use super::concat::Bias;
use super::ReferenceCounter;

/// The variants a sequence can take.
pub(crate) enum Node<T> {
    /// The canonical empty sequence.
    Empty,
    /// `length` copies of `value`.
    Uniform { value: T, length: usize },
    /// A window over a shared contiguous buffer.
    Flat {
        items: ReferenceCounter<[T]>,
        offset: usize,
        length: usize,
    },
    /// A whole contiguous buffer with a bucket-range table.
    Indexed {
        items: ReferenceCounter<[T]>,
        index: HashIndex,
        hasher: fn(&T) -> u32,
    },
    /// A window over another sequence.
    Section {
        base: Sequence<T>,
        offset: usize,
        length: usize,
    },
    /// The elements of `base` in opposite order.
    Reverse { base: Sequence<T> },
    /// `left` followed by `right`.
    Concat {
        left: Sequence<T>,
        right: Sequence<T>,
        bias: Bias,
        length: usize,
    },
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Uniform { length, .. }
            | Self::Flat { length, .. }
            | Self::Section { length, .. }
            | Self::Concat { length, .. } => *length,
            Self::Indexed { items, .. } => items.len(),
            Self::Reverse { base } => base.len(),
        }
    }
}

#[inline]
fn extract_slice<T, C: Collector<T> + ?Sized>(
    slice: &[T],
    target: &mut C,
    direction: Direction,
) -> bool {
    match direction {
        Direction::Forward => slice.iter().all(|value| target.push(value)),
        Direction::Backward => slice.iter().rev().all(|value| target.push(value)),
    }
}

#[inline]
fn find_in_slice<T: PartialEq>(slice: &[T], value: &T, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Forward => slice.iter().position(|item| item == value),
        Direction::Backward => slice.iter().rposition(|item| item == value),
    }
}

impl<T> Sequence<T> {
    /// Returns the element at `index`, walking down without recursion.
    pub(crate) fn lookup(&self, index: usize) -> Option<&T> {
        let mut current = self;
        let mut index = index;
        loop {
            match current.node() {
                Node::Empty => return None,
                Node::Uniform { value, length } => return (index < *length).then_some(value),
                Node::Flat {
                    items,
                    offset,
                    length,
                } => {
                    if index >= *length {
                        return None;
                    }
                    return items.get(offset + index);
                }
                Node::Indexed { items, .. } => return items.get(index),
                Node::Section {
                    base,
                    offset,
                    length,
                } => {
                    if index >= *length {
                        return None;
                    }
                    index += offset;
                    current = base;
                }
                Node::Reverse { base } => {
                    let length = base.len();
                    if index >= length {
                        return None;
                    }
                    index = length - index - 1;
                    current = base;
                }
                Node::Concat {
                    left,
                    right,
                    length,
                    ..
                } => {
                    if index >= *length {
                        return None;
                    }
                    let split = left.len();
                    if index < split {
                        current = left;
                    } else {
                        index -= split;
                        current = right;
                    }
                }
            }
        }
    }

    /// Pushes the window's elements into `target` in `direction`.
    ///
    /// Returns `false` if the collector aborted.
    pub(crate) fn extract_window<C: Collector<T> + ?Sized>(
        &self,
        target: &mut C,
        offset: usize,
        length: usize,
        direction: Direction,
    ) -> bool {
        if length == 0 {
            return true;
        }
        match self.node() {
            Node::Empty => true,
            Node::Uniform { value, .. } => (0..length).all(|_| target.push(value)),
            Node::Flat { items, offset: start, .. } => {
                let start = start + offset;
                extract_slice(&items[start..start + length], target, direction)
            }
            Node::Indexed { items, .. } => {
                extract_slice(&items[offset..offset + length], target, direction)
            }
            Node::Section { base, offset: start, .. } => {
                base.extract_window(target, start + offset, length, direction)
            }
            Node::Reverse { base } => base.extract_window(
                target,
                self.len() - offset - length,
                length,
                direction.reverse(),
            ),
            Node::Concat { left, right, .. } => {
                let split = left.len();
                if offset >= split {
                    return right.extract_window(target, offset - split, length, direction);
                }
                let end = offset + length;
                if end <= split {
                    return left.extract_window(target, offset, length, direction);
                }
                let (left_length, right_length) = (split - offset, end - split);
                match direction {
                    Direction::Forward => {
                        left.extract_window(target, offset, left_length, direction)
                            && right.extract_window(target, 0, right_length, direction)
                    }
                    Direction::Backward => {
                        right.extract_window(target, 0, right_length, direction)
                            && left.extract_window(target, offset, left_length, direction)
                    }
                }
            }
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first element equal to `value` met in
    /// `direction` inside the window.
    pub(crate) fn find_window(
        &self,
        value: &T,
        offset: usize,
        length: usize,
        direction: Direction,
    ) -> Option<usize> {
        if length == 0 {
            return None;
        }
        match self.node() {
            Node::Empty => None,
            Node::Uniform { value: item, .. } => (item == value).then_some(match direction {
                Direction::Forward => offset,
                Direction::Backward => offset + length - 1,
            }),
            Node::Flat { items, offset: start, .. } => {
                let start = start + offset;
                find_in_slice(&items[start..start + length], value, direction)
                    .map(|position| position + offset)
            }
            Node::Indexed {
                items,
                index,
                hasher,
            } => index.find(items, hasher(value), value, offset, length, direction),
            Node::Section { base, offset: start, .. } => base
                .find_window(value, start + offset, length, direction)
                .map(|position| position - start),
            Node::Reverse { base } => {
                let total = self.len();
                base.find_window(value, total - offset - length, length, direction.reverse())
                    .map(|position| total - position - 1)
            }
            Node::Concat { left, right, .. } => {
                let split = left.len();
                if offset >= split {
                    return right
                        .find_window(value, offset - split, length, direction)
                        .map(|position| position + split);
                }
                let end = offset + length;
                if end <= split {
                    return left.find_window(value, offset, length, direction);
                }
                let (left_length, right_length) = (split - offset, end - split);
                let in_left = || left.find_window(value, offset, left_length, direction);
                let in_right = || {
                    right
                        .find_window(value, 0, right_length, direction)
                        .map(|position| position + split)
                };
                match direction {
                    Direction::Forward => in_left().or_else(in_right),
                    Direction::Backward => in_right().or_else(in_left),
                }
            }
        }
    }

    /// Returns `true` if `needle` occurs at `position`.
    pub(crate) fn matches_at(&self, needle: &Self, position: usize) -> bool {
        (0..needle.len()).all(|index| self.lookup(position + index) == needle.lookup(index))
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the window as a sequence without nesting views.
    pub(crate) fn slice(&self, offset: usize, length: usize) -> Self {
        if offset == 0 && length == self.len() {
            return self.clone();
        }
        if length == 0 {
            return Self::new();
        }
        match self.node() {
            Node::Empty => Self::new(),
            Node::Uniform { value, .. } => Self::from_node(Node::Uniform {
                value: value.clone(),
                length,
            }),
            Node::Flat { items, offset: start, .. } => Self::from_node(Node::Flat {
                items: ReferenceCounter::clone(items),
                offset: start + offset,
                length,
            }),
            Node::Indexed { .. } => Self::from_node(Node::Section {
                base: self.clone(),
                offset,
                length,
            }),
            Node::Section { base, offset: start, .. } => base.slice(start + offset, length),
            Node::Reverse { base } => base.slice(self.len() - offset - length, length).reverse(),
            Node::Concat { left, right, .. } => {
                let split = left.len();
                if offset >= split {
                    return right.slice(offset - split, length);
                }
                let end = offset + length;
                if end <= split {
                    return left.slice(offset, length);
                }
                left.slice(offset, split - offset)
                    .concat(&right.slice(0, end - split))
            }
        }
    }
}
