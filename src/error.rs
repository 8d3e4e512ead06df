//! Error taxonomy for the evaluator and the change-making solver.
//!
//! Three failure families, all terminal for the operation that raised
//! them — every computation here is deterministic and in-memory, so an
//! internal retry would reproduce the identical failure:
//! - [`DomainError`]: an input violates preconditions.
//! - [`DuplicateKeyError`]: a cache key was written twice with different
//!   values, i.e. the combination rule is not a pure function.
//! - [`UnreachableAmountError`]: the denomination set cannot reduce the
//!   remaining amount to zero.

use thiserror::Error;

/// Input index/amount violates preconditions.
///
/// Raised at the public boundary before any recursion begins, so a failed
/// call never leaves a partially populated cache behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Requested index is negative; recurrences are defined on 0..=n.
    #[error("index {0} is negative")]
    NegativeIndex(i64),
    /// A predecessor chain fails to decrease, so no base case is reachable.
    #[error("no base case reachable from index {index}: predecessor {predecessor} does not decrease")]
    NoBaseCasePath {
        /// Index whose expansion went wrong.
        index: u64,
        /// Offending predecessor, >= `index`.
        predecessor: u64,
    },
    /// A denomination set must contain at least one denomination.
    #[error("denomination set is empty")]
    EmptyDenominations,
    /// Denominations are positive coin/bill values; zero never reduces an
    /// amount.
    #[error("denomination at position {0} is zero")]
    ZeroDenomination(usize),
    /// Denominations must be strictly descending (which also rules out
    /// duplicates).
    #[error("denominations not strictly descending at position {position}: {value} follows {previous}")]
    UnsortedDenominations {
        /// Position of the out-of-order value.
        position: usize,
        /// The out-of-order value.
        value: u64,
        /// The value preceding it.
        previous: u64,
    },
}

/// Attempted overwrite of a cache key with a different value.
///
/// Indicates a caller bug — a non-deterministic combination rule — rather
/// than a fault in the cache itself. Inserting the *same* value again is
/// idempotent and allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cache already holds a different value for index {key}")]
pub struct DuplicateKeyError {
    /// Key whose existing value differs from the attempted write.
    pub key: u64,
}

/// The denomination set cannot reduce the remaining amount to zero.
///
/// Surfaced after a full pass over the denominations makes no progress,
/// instead of looping forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot reduce remaining {remaining} of amount {amount} with the given denominations")]
pub struct UnreachableAmountError {
    /// The amount originally requested.
    pub amount: u64,
    /// What was still outstanding when progress stopped.
    pub remaining: u64,
}

/// Failure type of the evaluator's public operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Precondition violation on the requested index.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Cache-purity violation while storing a combined result.
    #[error(transparent)]
    Cache(#[from] DuplicateKeyError),
}
