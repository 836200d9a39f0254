//! Value interning cache
//!
//! Repeated values are common in query workloads, so the engine deduplicates
//! equal immutable values into shared instances. The cache is direct-mapped:
//! a fixed, power-of-two number of slots indexed by the hash of
//! (kind, encoding), each slot holding at most one value and overwritten on
//! collision. Memory is bounded by construction, with no eviction bookkeeping.
//!
//! # Concurrency
//!
//! Each slot carries its own `parking_lot::Mutex`, so lookup-or-insert is
//! atomic per key while unrelated keys rarely contend. Two racing callers may
//! transiently allocate duplicates for the same key; at most one ends up in
//! the slot, and equality/hash contracts hold for every handle either way.
//!
//! # Injection
//!
//! The cache is an explicit object handed to value constructors, so tests run
//! against a fresh isolated instance. [`ValueCache::global`] provides the
//! process-wide default used by the convenience constructors; it lives for
//! the whole process and is never torn down.

use crate::ssn::{SsnKind, SsnValue};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::trace;

/// Configuration for a [`ValueCache`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of slots; rounded up to the next power of two (default: 4096)
    pub slot_count: usize,

    /// Per-element size limit in bytes (default: 4096)
    ///
    /// Encodings larger than this bypass the cache entirely and are allocated
    /// directly, never registered. Not reachable for fixed-width SSN
    /// encodings, but the contract is shared with variable-width value kinds.
    pub max_element_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            slot_count: 4096,
            max_element_size: 4096,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with small values for testing
    ///
    /// Useful for unit tests that exercise collision overwrite and the
    /// oversize bypass without building large inputs.
    pub fn with_small_limits() -> Self {
        CacheConfig {
            slot_count: 8,
            max_element_size: 16,
        }
    }
}

/// Size-bounded interning cache mapping (kind, encoding) to shared values
#[derive(Debug)]
pub struct ValueCache {
    slots: Box<[Mutex<Option<SsnValue>>]>,
    mask: usize,
    max_element_size: usize,
}

impl ValueCache {
    /// Create a cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        let slot_count = config.slot_count.next_power_of_two().max(1);
        let slots = (0..slot_count)
            .map(|_| Mutex::new(None))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        ValueCache {
            slots,
            mask: slot_count - 1,
            max_element_size: config.max_element_size,
        }
    }

    /// The process-wide default cache
    pub fn global() -> &'static ValueCache {
        static GLOBAL: Lazy<ValueCache> = Lazy::new(|| ValueCache::new(CacheConfig::default()));
        &GLOBAL
    }

    /// Number of slots in this cache
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Return the shared instance for (kind, encoding), allocating on miss
    ///
    /// A hit returns a handle sharing the cached instance's storage. A miss
    /// allocates, installs the new value (overwriting any colliding entry),
    /// and returns it. Oversized encodings skip the slots entirely.
    pub fn intern(&self, kind: SsnKind, encoding: &str) -> SsnValue {
        if encoding.len() > self.max_element_size {
            trace!(
                len = encoding.len(),
                max = self.max_element_size,
                "encoding exceeds per-element cache limit, bypassing"
            );
            return SsnValue::new_uncached(kind, encoding);
        }

        let idx = self.slot_index(kind, encoding);
        let mut slot = self.slots[idx].lock();
        if let Some(existing) = slot.as_ref() {
            if existing.kind() == kind && existing.encoding() == encoding {
                trace!(slot = idx, "intern hit");
                return existing.clone();
            }
        }
        trace!(slot = idx, "intern miss");
        let value = SsnValue::new_uncached(kind, encoding);
        *slot = Some(value.clone());
        value
    }

    fn slot_index(&self, kind: SsnKind, encoding: &str) -> usize {
        let mut hasher = FxHasher::default();
        kind.hash(&mut hasher);
        encoding.hash(&mut hasher);
        (hasher.finish() as usize) & self.mask
    }
}
