//! Unit tests for ListView and SequenceMap.

use lambars_sequence::sequence::{Sequence, SequenceError, SequenceMap};
use rstest::rstest;

// =============================================================================
// ListView
// =============================================================================

#[rstest]
fn test_list_view_reads_through_sequence() {
    let sequence = Sequence::from_vec(vec![10, 20]).concat(&Sequence::uniform(2, 30));
    let list = sequence.as_list();
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());
    assert_eq!(list.get(3), Some(&30));
    assert_eq!(list.get(4), None);
    assert_eq!(list[1], 20);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 30]);
    assert!(list.sequence().ptr_eq(&sequence));
}

#[rstest]
fn test_list_view_search() {
    let sequence = Sequence::from_vec(vec!['a', 'b', 'c', 'b']);
    let list = sequence.as_list();
    assert_eq!(list.index_of(&'b'), Some(1));
    assert_eq!(list.last_index_of(&'b'), Some(3));
    assert_eq!(list.index_of(&'z'), None);
    assert!(list.contains(&'c'));
}

#[rstest]
fn test_sub_list_uses_exclusive_end() {
    let sequence: Sequence<i32> = (0..6).collect();
    let list = sequence.as_list();
    assert_eq!(list.sub_list(1, 4).unwrap().to_vec(), vec![1, 2, 3]);
    assert!(list.sub_list(3, 3).unwrap().is_empty());
    assert!(list.sub_list(0, 6).unwrap().ptr_eq(&sequence));
}

#[rstest]
#[case(4, 2)]
#[case(2, 7)]
fn test_sub_list_rejects_bad_bounds(#[case] from: usize, #[case] to: usize) {
    let sequence: Sequence<i32> = (0..6).collect();
    assert!(matches!(
        sequence.as_list().sub_list(from, to),
        Err(SequenceError::InvalidArgument { .. })
    ));
}

#[rstest]
#[should_panic(expected = "index 2 out of bounds for length 2")]
fn test_list_view_index_panics_past_end() {
    let sequence = Sequence::from_vec(vec![1, 2]);
    let list = sequence.as_list();
    let _value: i32 = list[2];
}

#[rstest]
fn test_list_view_debug() {
    let sequence = Sequence::uniform(2, 'k');
    assert_eq!(format!("{:?}", sequence.as_list()), "['k', 'k']");
}

// =============================================================================
// SequenceMap
// =============================================================================

#[rstest]
fn test_map_from_entries_looks_up_values() {
    let map = SequenceMap::from_entries((0..100).map(|key| (key, key * 2)));
    assert_eq!(map.len(), 100);
    assert!(map.keys().is_indexed());
    assert_eq!(map.get(&42), Some(&84));
    assert_eq!(map.get(&100), None);
    assert!(map.contains_key(&0));
    assert!(map.contains_value(&198));
    assert!(!map.contains_value(&199));
}

#[rstest]
fn test_map_first_key_occurrence_wins() {
    let map = SequenceMap::from_entries(vec![("a", 1), ("b", 2), ("a", 3)]);
    assert_eq!(map.get(&"a"), Some(&1));
    assert_eq!(map.len(), 3);
}

#[rstest]
fn test_map_new_rejects_length_mismatch() {
    let keys = Sequence::from_vec(vec![1, 2]);
    let values = Sequence::from_vec(vec!["x"]);
    assert!(matches!(
        SequenceMap::new(keys, values),
        Err(SequenceError::InvalidArgument { .. })
    ));
}

#[rstest]
fn test_map_over_unindexed_keys() {
    let keys = Sequence::from_vec(vec![3, 1, 2]);
    let values = Sequence::from_vec(vec!["three", "one", "two"]);
    let map = SequenceMap::new(keys, values).unwrap();
    assert_eq!(map.get(&1), Some(&"one"));
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        vec![(&3, &"three"), (&1, &"one"), (&2, &"two")]
    );
}

#[rstest]
fn test_map_round_trips_through_sequence_encoding() {
    let map = SequenceMap::from_entries(vec![(1, 10), (2, 20)]);
    let encoded = map.to_sequence();
    assert_eq!(encoded.len(), 2);
    let decoded = encoded.to_map().unwrap();
    assert_eq!(decoded.get(&2), Some(&20));
    let (keys, values) = decoded.into_parts();
    assert_eq!(keys.to_vec(), vec![1, 2]);
    assert_eq!(values.to_vec(), vec![10, 20]);
}

#[rstest]
fn test_to_map_rejects_wrong_shape() {
    let single = Sequence::from_vec(vec![Sequence::from_vec(vec![1])]);
    assert!(single.to_map().is_err());
    let uneven = Sequence::from_vec(vec![Sequence::from_vec(vec![1, 2]), Sequence::uniform(1, 3)]);
    assert!(uneven.to_map().is_err());
}

#[rstest]
fn test_empty_map() {
    let map: SequenceMap<u8, u8> = SequenceMap::from_entries(Vec::new());
    assert!(map.is_empty());
    assert_eq!(map.get(&0), None);
    assert_eq!(format!("{map:?}"), "{}");
}

#[rstest]
fn test_map_debug() {
    let map = SequenceMap::from_entries(vec![(1, 'a')]);
    assert_eq!(format!("{map:?}"), "{1: 'a'}");
}
