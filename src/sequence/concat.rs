//! Concatenation with shape-driven rebalancing.
//!
//! Concat nodes carry no depth counter. Instead each node records which of
//! its children was heavier when it was built ([`Bias`]), and the *shape* of
//! a node is the length of the walk that always follows the biased child.
//! `join` compares the shapes of both operands and rotates the heavier one
//! until they differ by at most one, so long chains of concatenations keep
//! a bounded access depth without ever mutating an existing node.
//!
//! ```text
//! shape(a) + 1 < shape(b), b not left-biased:
//!
//!     a + (bl + br)   =>   (a + bl) + br
//!
//! shape(a) + 1 < shape(b), b left-biased:
//!
//!     a + ((bll + blr) + br)   =>   (a + bll) + (blr + br)
//! ```

use super::Sequence;
use super::node::Node;

/// Which child of a concat node is the heavier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bias {
    /// Both children had the same shape.
    Neutral,
    /// The left child had the larger shape.
    Left,
    /// The right child had the larger shape.
    Right,
}

impl<T> Sequence<T> {
    /// Returns the children and bias of a concat node.
    fn children(&self) -> Option<(&Self, &Self, Bias)> {
        match self.node() {
            Node::Concat {
                left, right, bias, ..
            } => Some((left, right, *bias)),
            _ => None,
        }
    }

    /// Counts the concat nodes on the biased spine.
    pub(crate) fn shape(&self) -> usize {
        let mut current = self;
        let mut shape = 0;
        while let Some((left, right, bias)) = current.children() {
            current = if bias == Bias::Right { right } else { left };
            shape += 1;
        }
        shape
    }

    /// Concatenates two non-empty sequences.
    pub(crate) fn join(first: &Self, second: &Self) -> Self {
        let first_shape = first.shape();
        let second_shape = second.shape();

        if first_shape + 1 < second_shape {
            if let Some((left, right, bias)) = second.children() {
                if bias != Bias::Left {
                    return Self::join(&Self::join(first, left), right);
                }
                if let Some((inner_left, inner_right, _)) = left.children() {
                    return Self::join(
                        &Self::join(first, inner_left),
                        &Self::join(inner_right, right),
                    );
                }
            }
        }

        if second_shape + 1 < first_shape {
            if let Some((left, right, bias)) = first.children() {
                if bias != Bias::Right {
                    return Self::join(left, &Self::join(right, second));
                }
                if let Some((inner_left, inner_right, _)) = right.children() {
                    return Self::join(
                        &Self::join(left, inner_left),
                        &Self::join(inner_right, second),
                    );
                }
            }
        }

        let bias = match first_shape.cmp(&second_shape) {
            std::cmp::Ordering::Greater => Bias::Left,
            std::cmp::Ordering::Less => Bias::Right,
            std::cmp::Ordering::Equal => Bias::Neutral,
        };
        Self::from_node(Node::Concat {
            left: first.clone(),
            right: second.clone(),
            bias,
            length: first.len() + second.len(),
        })
    }

    /// Concatenates all sequences by balanced halving.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_sequence::sequence::Sequence;
    ///
    /// let parts: Vec<Sequence<i32>> = (0..4).map(|value| Sequence::uniform(2, value)).collect();
    /// let joined = Sequence::concat_all(&parts);
    /// assert_eq!(joined.to_vec(), vec![0, 0, 1, 1, 2, 2, 3, 3]);
    /// ```
    #[must_use]
    pub fn concat_all(sequences: &[Self]) -> Self {
        match sequences {
            [] => Self::new(),
            [single] => single.clone(),
            _ => {
                let (low, high) = sequences.split_at(sequences.len() / 2);
                Self::concat_all(low).concat(&Self::concat_all(high))
            }
        }
    }
}
