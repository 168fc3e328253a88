#![cfg(feature = "typeclass")]
//! Property-based tests for the Semigroup and Monoid laws of Sequence.

use lambars_sequence::sequence::Sequence;
use lambars_sequence::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

fn sequence_strategy() -> impl Strategy<Value = Sequence<i16>> {
    prop::collection::vec(prop::collection::vec(any::<i16>(), 0..8), 0..6).prop_map(|parts| {
        parts
            .into_iter()
            .map(Sequence::from_vec)
            .fold(Sequence::new(), Semigroup::combine)
    })
}

proptest! {
    /// Associativity: (a <> b) <> c == a <> (b <> c)
    #[test]
    fn prop_semigroup_associativity(
        first in sequence_strategy(),
        second in sequence_strategy(),
        third in sequence_strategy()
    ) {
        let left = first.clone().combine(second.clone()).combine(third.clone());
        let right = first.combine(second.combine(third));
        prop_assert_eq!(left, right);
    }

    /// Left identity: empty <> a == a
    #[test]
    fn prop_monoid_left_identity(value in sequence_strategy()) {
        prop_assert_eq!(Sequence::empty().combine(value.clone()), value);
    }

    /// Right identity: a <> empty == a
    #[test]
    fn prop_monoid_right_identity(value in sequence_strategy()) {
        prop_assert_eq!(value.clone().combine(Sequence::empty()), value);
    }

    /// Balanced combine_all agrees with a left fold
    #[test]
    fn prop_combine_all_matches_fold(
        values in prop::collection::vec(sequence_strategy(), 0..10)
    ) {
        let folded = values
            .iter()
            .fold(Sequence::empty(), |accumulator: Sequence<i16>, value| accumulator.combine_ref(value));
        let combined = Sequence::combine_all(values.clone());
        prop_assert_eq!(combined, folded);
        prop_assert_eq!(Sequence::reduce_all(values.clone()).unwrap_or_default(), Sequence::combine_all(values));
    }
}
