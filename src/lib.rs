//! Memoized recurrence evaluation engine.
//!
//! This crate provides a small engine for computing values of problems
//! expressible as optimal-substructure recurrences — Fibonacci numbers,
//! minimum-coin change, 0/1 knapsack — with a pluggable evaluation
//! strategy (naive recursion vs. memoized) for comparative benchmarking,
//! plus a greedy change-making solver with diagnostic counters.
//!
//! ## Core idea
//! 1. Model your problem as a recurrence with base cases, strictly
//!    decreasing predecessors, and a combination rule.
//! 2. Implement the [`Recurrence`] trait for that recurrence.
//! 3. Let [`evaluate_memoized`] resolve it through an [`EvalCache`], or
//!    [`evaluate_naive`] recompute it from scratch as a baseline.
//!
//! Both strategies return identical values for every valid index; the
//! memoized one does O(n) work cold and O(1) warm against the same cache
//! instance.
//!
//! ## Quick start
//! ```
//! use memo_dp::{evaluate_memoized, make_change, Denominations, MemoCache};
//! use memo_dp::problems::fibonacci::FibonacciSpec;
//!
//! let mut cache = MemoCache::new();
//! let f14 = evaluate_memoized(&FibonacciSpec, 14, &mut cache).unwrap();
//! assert_eq!(f14, 377);
//!
//! let change = make_change(34, &Denominations::canonical()).unwrap();
//! assert_eq!(change.coins, vec![20, 10, 1, 1, 1, 1]);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains reference implementations for:
//! - Fibonacci numbers
//! - Minimum-coin change (optimal count, unbounded coins)
//! - 0/1 knapsack
//!
//! These serve both as ready-to-use tools and as templates for wiring your
//! own recurrences into the evaluator.
//!
//! ## Execution model
//! Everything here is synchronous, CPU-bound, in-memory computation: no
//! I/O, no background tasks, no suspension points. The default
//! [`MemoCache`] assumes a single caller; [`SharedCache`] serializes the
//! check-then-set sequence for threads sharing one cache.

pub mod cache;
pub mod change;
pub mod error;
pub mod evaluator;
pub mod problems;
pub mod traits;

pub use crate::cache::{EvalCache, MemoCache, SharedCache};
pub use crate::change::{make_change, ChangeResult, Denominations};
pub use crate::error::{DomainError, DuplicateKeyError, EvalError, UnreachableAmountError};
pub use crate::evaluator::{
    evaluate, evaluate_memoized, evaluate_naive, EvalStats, Evaluation, Strategy,
};
pub use crate::traits::{Predecessors, Recurrence};
