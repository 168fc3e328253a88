//! Integration tests for sharing sequences across threads.
//!
//! These tests need the `arc` feature, which backs sequences with `Arc`.

#![cfg(feature = "arc")]

use lambars_sequence::sequence::{Sequence, SequenceMap};
use rstest::rstest;
use std::thread;

#[rstest]
fn test_cross_thread_structural_sharing() {
    let original: Sequence<u32> = (0..1_000).collect();

    let handles: Vec<_> = (0..4_u32)
        .map(|index| {
            let shared = original.clone();
            thread::spawn(move || {
                let extended = shared.concat(&Sequence::uniform(10, index));
                assert_eq!(extended.len(), 1_010);
                assert_eq!(extended.get(1_005), Ok(&index));
                assert_eq!(shared.len(), 1_000);
                extended
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, sequence) in results.iter().enumerate() {
        assert_eq!(sequence.last(), Some(&(index as u32)));
    }
    assert_eq!(original.len(), 1_000);
}

#[rstest]
fn test_concurrent_hash_code_agrees() {
    let sequence: Sequence<u64> = (0..5_000).collect::<Sequence<_>>().reverse();
    let expected = sequence.clone().compact(false).hash_code();

    let hashes: Vec<u32> = (0..8)
        .map(|_| {
            let shared = sequence.clone();
            thread::spawn(move || shared.hash_code())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    assert!(hashes.iter().all(|hash| *hash == expected));
    assert_eq!(sequence.hash_code(), expected);
}

#[rstest]
fn test_indexed_search_from_many_threads() {
    let map = SequenceMap::from_entries((0..2_000_u32).map(|key| (key, key.to_string())));

    let handles: Vec<_> = (0..4_u32)
        .map(|thread_index| {
            let shared = map.clone();
            thread::spawn(move || {
                (thread_index * 500..(thread_index + 1) * 500)
                    .all(|key| shared.get(&key) == Some(&key.to_string()))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("Thread panicked"));
    }
}
