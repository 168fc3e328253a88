//! Tests for hash-indexed search.
//!
//! Search cost is measured by counting element comparisons, which keeps the
//! checks deterministic where wall-clock timing would not be.

use lambars_sequence::sequence::{Sequence, hash_mask};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::cell::Cell;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

thread_local! {
    static COMPARISONS: Cell<usize> = const { Cell::new(0) };
}

fn reset_comparisons() {
    COMPARISONS.with(|count| count.set(0));
}

fn comparisons() -> usize {
    COMPARISONS.with(Cell::get)
}

/// An element that counts how often it is compared.
#[derive(Debug, Clone, Copy)]
struct Counted(u64);

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        COMPARISONS.with(|count| count.set(count.get() + 1));
        self.0 == other.0
    }
}

impl Eq for Counted {}

impl Hash for Counted {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

fn random_elements(count: usize, seed: u64) -> Vec<Counted> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Counted(rng.r#gen::<u64>())).collect()
}

fn first_positions(elements: &[Counted]) -> HashMap<u64, usize> {
    let mut positions = HashMap::new();
    for (position, element) in elements.iter().enumerate() {
        positions.entry(element.0).or_insert(position);
    }
    positions
}

/// Builds the sequence out of many small parts so that compaction has
/// real work to do.
fn chunked(elements: &[Counted]) -> Sequence<Counted> {
    let parts: Vec<Sequence<Counted>> = elements
        .chunks(37)
        .map(Sequence::from_slice)
        .collect();
    Sequence::concat_all(&parts)
}

// =============================================================================
// Random lookups
// =============================================================================

#[rstest]
fn test_every_element_is_found_at_its_original_position() {
    let elements = random_elements(10_000, 0x5EED);
    let expected = first_positions(&elements);
    let indexed = chunked(&elements).compact(true);
    assert!(indexed.is_indexed());

    reset_comparisons();
    for element in &elements {
        let found = indexed.find(element, 0).unwrap();
        assert_eq!(found, expected.get(&element.0).copied());
    }
    let total = comparisons();

    // A successful lookup in a table with load factor below one compares
    // about one and a half elements on average.
    assert!(
        total <= 3 * elements.len(),
        "indexed lookups used {total} comparisons for {} elements",
        elements.len()
    );
}

#[rstest]
fn test_indexed_search_compares_far_less_than_linear_search() {
    let elements = random_elements(2_000, 7);
    let flat = chunked(&elements).compact(false);
    let indexed = flat.compact(true);

    let probes = &elements[1_000..1_100];

    reset_comparisons();
    for element in probes {
        let _ = flat.find(element, 0);
    }
    let linear = comparisons();

    reset_comparisons();
    for element in probes {
        let _ = indexed.find(element, 0);
    }
    let hashed = comparisons();

    assert!(linear >= 100_000);
    assert!(hashed * 100 < linear, "hashed {hashed} vs linear {linear}");
}

#[rstest]
fn test_missing_elements_report_none() {
    let elements = random_elements(1_000, 11);
    let indexed = chunked(&elements).compact(true);
    let present = first_positions(&elements);
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..200 {
        let probe = Counted(rng.r#gen::<u64>());
        if !present.contains_key(&probe.0) {
            assert_eq!(indexed.find(&probe, 0), Ok(None));
        }
    }
}

// =============================================================================
// Duplicates and windows
// =============================================================================

#[rstest]
fn test_duplicates_resolve_in_position_order() {
    let values: Vec<u32> = (0..300).map(|value| value % 17).collect();
    let linear = Sequence::from_vec(values.clone());
    let indexed = linear.compact(true);
    for value in 0..17 {
        for offset in [0, 1, 16, 17, 150, 299, 300] {
            assert_eq!(indexed.find(&value, offset), linear.find(&value, offset));
        }
        assert_eq!(indexed.find_last(&value), linear.find_last(&value));
    }
}

#[rstest]
fn test_reverse_of_indexed_searches_from_the_far_end() {
    let values: Vec<u32> = vec![1, 2, 3, 1, 2, 3];
    let indexed = Sequence::from_vec(values).compact(true);
    let reversed = indexed.reverse();
    assert!(reversed.is_indexed());
    assert_eq!(reversed.find(&1, 0), Ok(Some(2)));
    assert_eq!(reversed.find(&1, 3), Ok(Some(5)));
    assert_eq!(reversed.find_last(&3), Some(3));
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(3, 3)]
#[case(4, 3)]
#[case(1_000, 1_023)]
#[case(1_024, 1_023)]
#[case(1_025, 2_047)]
fn test_hash_mask(#[case] entries: usize, #[case] expected: usize) {
    assert_eq!(hash_mask(entries), expected);
}

#[rstest]
fn test_index_tables_are_consistent() {
    let values: Vec<u64> = (0..500).map(|value| value * 31).collect();
    let indexed = Sequence::from_vec(values).compact(true);
    let index = indexed.hash_index().unwrap();
    let ranges = index.ranges();
    assert_eq!(ranges.len(), index.bucket_count() + 1);
    assert_eq!(ranges[0], 0);
    assert_eq!(ranges[index.bucket_count()], 500);
    assert!(ranges.windows(2).all(|pair| pair[0] <= pair[1]));

    let mut seen: Vec<usize> = index.positions().to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (0..500).collect::<Vec<_>>());

    for bucket in ranges.windows(2) {
        let positions = &index.positions()[bucket[0]..bucket[1]];
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
