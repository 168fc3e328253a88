//! Element and sequence hashing.
//!
//! Element hashes come from [`rustc_hash::FxHasher`], which is deterministic
//! across runs, so a hash index built in one process can be read back in
//! another. Sequence hashes fold element hashes in order with a 32-bit
//! FNV-style step.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use rustc_hash::FxHasher;

/// Initial value of the rolling sequence hash.
pub(crate) const HASH_SEED: u32 = 0x811C_9DC5;

/// Multiplier of the rolling sequence hash.
const HASH_PRIME: u32 = 0x0100_0193;

/// Stored instead of a computed hash of zero.
pub(crate) const HASH_SENTINEL: u32 = 1;

/// Hashes a single element to 32 bits.
#[inline]
pub(crate) fn element_hash<T: Hash + ?Sized>(value: &T) -> u32 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let wide = hasher.finish();
    #[allow(clippy::cast_possible_truncation)]
    let folded = (wide ^ (wide >> 32)) as u32;
    folded
}

/// Running state of a sequence hash.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HashAccumulator {
    state: u32,
}

impl HashAccumulator {
    pub(crate) const fn new() -> Self {
        Self { state: HASH_SEED }
    }

    #[inline]
    pub(crate) const fn push(&mut self, next: u32) {
        self.state = self.state.wrapping_mul(HASH_PRIME) ^ next;
    }

    /// Final hash; never zero.
    pub(crate) const fn finish(self) -> u32 {
        if self.state == 0 {
            HASH_SENTINEL
        } else {
            self.state
        }
    }
}

/// A write-once memo for a sequence hash.
///
/// Zero means "not computed yet". Racing writers store the same value, so
/// relaxed ordering is enough.
#[derive(Debug, Default)]
pub(crate) struct HashCache {
    value: AtomicU32,
}

impl HashCache {
    pub(crate) const fn new() -> Self {
        Self {
            value: AtomicU32::new(0),
        }
    }

    #[inline]
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> u32) -> u32 {
        let cached = self.value.load(Ordering::Relaxed);
        if cached != 0 {
            return cached;
        }
        let computed = compute();
        self.value.store(computed, Ordering::Relaxed);
        computed
    }

    pub(crate) fn seed(&self, value: u32) {
        self.value.store(value, Ordering::Relaxed);
    }

    pub(crate) fn peek(&self) -> Option<u32> {
        match self.value.load(Ordering::Relaxed) {
            0 => None,
            value => Some(value),
        }
    }
}
