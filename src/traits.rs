//! Core trait definition for memoizable recurrences.
//!
//! To plug a dynamic program into the evaluator, implement [`Recurrence`]
//! for a spec struct that captures your instance (e.g. denominations,
//! knapsack items).
//!
//! The trait encodes the optimal-substructure shape the evaluator relies on:
//! - Base cases: explicit values for the recurrence's anchor indices.
//! - Predecessors: the strictly smaller indices a result depends on.
//! - Combination: how sub-results merge into the result for an index.
//!
//! The evaluator orchestrates recursion, memoization, and counting using
//! only these primitives. Implementations are read-only configuration: a
//! spec is constructed once and never mutated during a solve.

use core::fmt;

use smallvec::SmallVec;

/// Most recurrences depend on at most two predecessors; larger fan-ins
/// (e.g. one per denomination) spill to the heap.
pub type Predecessors = SmallVec<[u64; 2]>;

/// Trait for a fixed recurrence instance f(0), f(1), ... f(n).
///
/// Semantics:
/// - Indices are non-negative; the evaluator validates sign at its public
///   boundary, so implementations only ever see `u64`.
/// - `base_case(i)` pins down f(i) directly for the anchors.
/// - For any index not covered by a base case, `predecessors(i)` names the
///   sub-results f(p) needed to form f(i), and `combine(i, parts)` merges
///   them; parts arrive in the same order `predecessors` listed them.
///
/// Contract:
/// - `predecessors` and `combine` are only invoked for indices where
///   `base_case` returned `None`; implementations may rely on this and
///   need not guard their index arithmetic against anchor indices.
/// - Every predecessor must be strictly smaller than its index. The
///   evaluator checks this and fails with a domain error rather than
///   recursing forever on a non-decreasing chain.
/// - `combine` must be deterministic; the cache refuses to overwrite a
///   key with a different value, so a non-deterministic rule surfaces as
///   a duplicate-key failure instead of silent corruption.
pub trait Recurrence {
    /// Computed result type: an integer or decimal value, or an `Option`
    /// of one when "unsolvable" is itself a legitimate answer.
    type Value: Copy + PartialEq + fmt::Debug;

    /// Value of f(index) if `index` is an anchor of the recurrence.
    fn base_case(&self, index: u64) -> Option<Self::Value>;

    /// Indices of the sub-results f(index) depends on.
    ///
    /// May be empty for indices that are neither anchored nor reachable;
    /// `combine` then decides what an empty dependency set means (for
    /// minimum-coin change, "unreachable").
    fn predecessors(&self, index: u64) -> Predecessors;

    /// Merge sub-results into f(index).
    ///
    /// `parts[k]` is the resolved value for `predecessors(index)[k]`.
    fn combine(&self, index: u64, parts: &[Self::Value]) -> Self::Value;
}
