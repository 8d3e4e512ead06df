//! Cache backends for memoized evaluation.
//!
//! The evaluator only depends on the [`EvalCache`] contract, so the default
//! in-memory [`MemoCache`] can be swapped for anything honouring the same
//! get/insert/clear surface — a distributed cache client, a bounded
//! wrapper with eviction, etc. No backend here evicts: entries persist for
//! the lifetime of the instance, and bounded memory is the caller's
//! concern.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::DuplicateKeyError;

/// Mapping from problem index to solved value.
///
/// Invariant: once written, a key's value never changes. [`EvalCache::insert`]
/// enforces this by rejecting a write that disagrees with the stored value;
/// re-inserting the identical value is an idempotent no-op.
pub trait EvalCache<V: Copy + PartialEq> {
    /// Look up the solved value for `key`, if present.
    fn get(&self, key: u64) -> Option<V>;

    /// Record the solved value for `key`.
    ///
    /// Fails with [`DuplicateKeyError`] if `key` is already present with a
    /// different value.
    fn insert(&mut self, key: u64, value: V) -> Result<(), DuplicateKeyError>;

    /// Reset to empty.
    fn clear(&mut self);

    /// Number of solved entries.
    fn len(&self) -> usize;

    /// Returns true if no entries are present.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default in-memory cache backend.
///
/// Callers that would previously have baked a precomputed table into the
/// logic seed one of these instead, e.g. from values fetched out of an
/// external cache service:
///
/// ```
/// use memo_dp::{EvalCache, MemoCache};
///
/// let warm: MemoCache<u128> = [(10, 55), (11, 89), (12, 144)].into_iter().collect();
/// assert_eq!(warm.get(12), Some(144));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoCache<V> {
    entries: HashMap<u64, V>,
}

impl<V: Copy + PartialEq> MemoCache<V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Copy + PartialEq> EvalCache<V> for MemoCache<V> {
    fn get(&self, key: u64) -> Option<V> {
        self.entries.get(&key).copied()
    }

    fn insert(&mut self, key: u64, value: V) -> Result<(), DuplicateKeyError> {
        match self.entries.get(&key) {
            Some(existing) if *existing != value => Err(DuplicateKeyError { key }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(key, value);
                Ok(())
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<V: Copy + PartialEq> FromIterator<(u64, V)> for MemoCache<V> {
    fn from_iter<I: IntoIterator<Item = (u64, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Lock-serialized cache for concurrent callers.
///
/// The whole check-then-set sequence of [`EvalCache::insert`] runs under
/// one lock acquisition, preserving the at-most-once-write invariant when
/// several threads evaluate the same recurrence against a shared instance.
/// Clones share the underlying storage.
///
/// A poisoned lock is recovered rather than propagated: every write is a
/// single atomic insert, so the underlying map is consistent even if a
/// panicking thread held the lock.
#[derive(Debug, Default)]
pub struct SharedCache<V> {
    inner: Arc<Mutex<MemoCache<V>>>,
}

impl<V: Copy + PartialEq> SharedCache<V> {
    /// Create an empty shared cache.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoCache::new())),
        }
    }
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Copy + PartialEq> EvalCache<V> for SharedCache<V> {
    fn get(&self, key: u64) -> Option<V> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
    }

    fn insert(&mut self, key: u64, value: V) -> Result<(), DuplicateKeyError> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value)
    }

    fn clear(&mut self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
