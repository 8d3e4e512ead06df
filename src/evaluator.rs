//! Recurrence evaluation with pluggable strategy.
//!
//! Two strategies over the same [`Recurrence`] spec:
//! - [`evaluate_naive`]: pure recursion, exponential for non-trivial
//!   recurrences. Correctness oracle and performance baseline.
//! - [`evaluate_memoized`]: cache-backed resolution, O(n) cold and O(1)
//!   for anything already solved. Must agree with the naive strategy for
//!   every valid index; that equivalence is the core correctness property,
//!   not merely an optimization.
//!
//! [`evaluate`] dispatches on [`Strategy`] and reports wall-clock time and
//! work counters alongside the value, for comparative benchmarking.
//!
//! The memoized strategy resolves dependencies over an explicit work stack
//! rather than call-stack recursion, so a recurrence millions of layers
//! deep cannot overflow the thread stack.

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::cache::EvalCache;
use crate::error::{DomainError, EvalError};
use crate::traits::Recurrence;

/// Evaluation strategy selector.
///
/// Behavior toggles are passed in explicitly per call; there is no
/// process-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Pure recursion using only base cases and the combination rule.
    Naive,
    /// Recursion through a cache of already-solved sub-results.
    Memoized,
}

impl Strategy {
    /// Short name for logs and probe output.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Memoized => "memoized",
        }
    }
}

/// Work counters observable by tests and probes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Combination-rule invocations performed.
    pub combines: u64,
    /// Sub-results answered from the cache.
    pub cache_hits: u64,
    /// Sub-results absent from the cache and scheduled for computation.
    pub cache_misses: u64,
}

/// Result of a timed [`evaluate`] call.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<V> {
    /// Computed value f(index).
    pub value: V,
    /// Strategy that produced it.
    pub strategy: Strategy,
    /// Wall-clock time of the call.
    pub elapsed: Duration,
    /// Work performed during the call.
    pub stats: EvalStats,
}

/// Compute f(index) by pure recursion, without memoization.
///
/// Exponential in `index` for recurrences with overlapping subproblems
/// (Fibonacci: O(phi^n)); intended as an oracle and baseline for small
/// indices.
///
/// Fails with [`DomainError`] if `index` is negative or a predecessor
/// chain fails to decrease.
pub fn evaluate_naive<R: Recurrence>(spec: &R, index: i64) -> Result<R::Value, EvalError> {
    let index = validate_index(index)?;
    let mut stats = EvalStats::default();
    naive(spec, index, &mut stats)
}

/// Compute f(index) through `cache`, solving missing sub-results on demand.
///
/// An index covered by a base case is answered directly and never touches
/// the cache. A previously solved index is answered in O(1) with zero new
/// combination-rule invocations. An empty cache populates itself lazily;
/// across repeated calls against the same instance the amortized cost of
/// reaching index n is O(n).
///
/// Fails with [`DomainError`] before any recursion begins if `index` is
/// invalid, so a failed call never leaves the cache half-updated.
pub fn evaluate_memoized<R, C>(spec: &R, index: i64, cache: &mut C) -> Result<R::Value, EvalError>
where
    R: Recurrence,
    C: EvalCache<R::Value>,
{
    let index = validate_index(index)?;
    let mut stats = EvalStats::default();
    memoized(spec, index, cache, &mut stats)
}

/// Compute f(index) under the chosen strategy, reporting timing and work
/// counters alongside the value.
///
/// [`Strategy::Naive`] ignores `cache`.
pub fn evaluate<R, C>(
    spec: &R,
    index: i64,
    strategy: Strategy,
    cache: &mut C,
) -> Result<Evaluation<R::Value>, EvalError>
where
    R: Recurrence,
    C: EvalCache<R::Value>,
{
    let index = validate_index(index)?;

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("evaluate", index, strategy = strategy.as_str());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let start = Instant::now();
    let mut stats = EvalStats::default();
    let value = match strategy {
        Strategy::Naive => naive(spec, index, &mut stats)?,
        Strategy::Memoized => memoized(spec, index, cache, &mut stats)?,
    };
    let elapsed = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        combines = stats.combines,
        cache_hits = stats.cache_hits,
        elapsed_us = elapsed.as_micros() as u64,
        "evaluation finished"
    );

    Ok(Evaluation {
        value,
        strategy,
        elapsed,
        stats,
    })
}

fn validate_index(index: i64) -> Result<u64, DomainError> {
    u64::try_from(index).map_err(|_| DomainError::NegativeIndex(index))
}

fn naive<R: Recurrence>(
    spec: &R,
    index: u64,
    stats: &mut EvalStats,
) -> Result<R::Value, EvalError> {
    if let Some(value) = spec.base_case(index) {
        return Ok(value);
    }

    let preds = spec.predecessors(index);
    let mut parts: SmallVec<[R::Value; 2]> = SmallVec::with_capacity(preds.len());
    for &p in &preds {
        if p >= index {
            return Err(DomainError::NoBaseCasePath {
                index,
                predecessor: p,
            }
            .into());
        }
        parts.push(naive(spec, p, stats)?);
    }

    stats.combines += 1;
    Ok(spec.combine(index, &parts))
}

/// Work item for the iterative memoized resolution.
///
/// `Expand` schedules an index for inspection; `Combine` fires once all of
/// an index's predecessors are solved. Stack discipline guarantees the
/// `Combine` for an index runs before any earlier-queued `Expand` of the
/// same index is revisited, so each index is combined at most once.
enum Frame {
    Expand(u64),
    Combine(u64),
}

fn memoized<R, C>(
    spec: &R,
    target: u64,
    cache: &mut C,
    stats: &mut EvalStats,
) -> Result<R::Value, EvalError>
where
    R: Recurrence,
    C: EvalCache<R::Value>,
{
    // Base-case indices short-circuit before the cache is involved at all.
    if let Some(value) = spec.base_case(target) {
        return Ok(value);
    }
    if let Some(value) = cache.get(target) {
        stats.cache_hits += 1;
        return Ok(value);
    }
    stats.cache_misses += 1;

    let mut stack = vec![Frame::Combine(target)];
    push_predecessors(spec, target, &mut stack)?;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Expand(index) => {
                if spec.base_case(index).is_some() {
                    continue;
                }
                if cache.get(index).is_some() {
                    stats.cache_hits += 1;
                    continue;
                }
                stats.cache_misses += 1;
                stack.push(Frame::Combine(index));
                push_predecessors(spec, index, &mut stack)?;
            }
            Frame::Combine(index) => {
                let preds = spec.predecessors(index);
                let mut parts: SmallVec<[R::Value; 2]> = SmallVec::with_capacity(preds.len());
                for &p in &preds {
                    // Present by construction: every predecessor was
                    // expanded before this frame could pop.
                    let value = resolve(spec, cache, p).expect("predecessor solved before combine");
                    parts.push(value);
                }
                let value = spec.combine(index, &parts);
                stats.combines += 1;
                cache.insert(index, value)?;
            }
        }
    }

    let value = resolve(spec, cache, target).expect("target solved by drained work stack");
    Ok(value)
}

fn push_predecessors<R: Recurrence>(
    spec: &R,
    index: u64,
    stack: &mut Vec<Frame>,
) -> Result<(), DomainError> {
    let preds = spec.predecessors(index);
    for &p in preds.iter().rev() {
        if p >= index {
            return Err(DomainError::NoBaseCasePath {
                index,
                predecessor: p,
            });
        }
        stack.push(Frame::Expand(p));
    }
    Ok(())
}

fn resolve<R, C>(spec: &R, cache: &C, index: u64) -> Option<R::Value>
where
    R: Recurrence,
    C: EvalCache<R::Value>,
{
    spec.base_case(index).or_else(|| cache.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoCache;
    use crate::error::DuplicateKeyError;
    use crate::traits::Predecessors;

    /// f(0) = 1, f(n) = 2 * f(n-1); closed form 2^n.
    struct Doubling;

    impl Recurrence for Doubling {
        type Value = u64;

        fn base_case(&self, index: u64) -> Option<u64> {
            (index == 0).then_some(1)
        }

        fn predecessors(&self, index: u64) -> Predecessors {
            Predecessors::from_slice(&[index - 1])
        }

        fn combine(&self, _index: u64, parts: &[u64]) -> u64 {
            2 * parts[0]
        }
    }

    /// Predecessors never decrease, so no base case is reachable.
    struct Stuck;

    impl Recurrence for Stuck {
        type Value = u64;

        fn base_case(&self, index: u64) -> Option<u64> {
            (index == 0).then_some(0)
        }

        fn predecessors(&self, index: u64) -> Predecessors {
            Predecessors::from_slice(&[index])
        }

        fn combine(&self, _index: u64, parts: &[u64]) -> u64 {
            parts[0]
        }
    }

    /// Backend simulating a conflicting write that slipped in between the
    /// evaluator's check and its set, as an unserialized concurrent writer
    /// could. Lookups always miss; storing key 1 conflicts.
    #[derive(Default)]
    struct RacedCache {
        writes: usize,
    }

    impl EvalCache<u64> for RacedCache {
        fn get(&self, _key: u64) -> Option<u64> {
            None
        }

        fn insert(&mut self, key: u64, _value: u64) -> Result<(), DuplicateKeyError> {
            if key == 1 {
                return Err(DuplicateKeyError { key });
            }
            self.writes += 1;
            Ok(())
        }

        fn clear(&mut self) {}

        fn len(&self) -> usize {
            self.writes
        }
    }

    #[test]
    fn strategies_agree_on_doubling() {
        let mut cache = MemoCache::new();
        for n in 0..=20 {
            let naive = evaluate_naive(&Doubling, n).unwrap();
            let memoized = evaluate_memoized(&Doubling, n, &mut cache).unwrap();
            assert_eq!(naive, memoized);
            assert_eq!(naive, 1 << n);
        }
    }

    #[test]
    fn negative_index_rejected_at_boundary() {
        let mut cache = MemoCache::new();
        let err = evaluate_memoized(&Doubling, -1, &mut cache).unwrap_err();
        assert_eq!(err, EvalError::Domain(DomainError::NegativeIndex(-1)));
        // Rejection happened before any cache traffic.
        assert!(cache.is_empty());
    }

    #[test]
    fn non_decreasing_predecessor_is_a_domain_error() {
        let mut cache = MemoCache::new();
        let err = evaluate_memoized(&Stuck, 5, &mut cache).unwrap_err();
        assert_eq!(
            err,
            EvalError::Domain(DomainError::NoBaseCasePath {
                index: 5,
                predecessor: 5,
            })
        );
        assert_eq!(evaluate_naive(&Stuck, 5).unwrap_err(), err);
    }

    #[test]
    fn conflicting_backend_write_surfaces_as_cache_error() {
        let mut cache = RacedCache::default();
        let err = evaluate_memoized(&Doubling, 3, &mut cache).unwrap_err();
        assert_eq!(err, EvalError::Cache(DuplicateKeyError { key: 1 }));
    }

    #[test]
    fn timed_evaluation_reports_work() {
        let mut cache = MemoCache::new();
        let run = evaluate(&Doubling, 16, Strategy::Memoized, &mut cache).unwrap();
        assert_eq!(run.value, 65536);
        assert_eq!(run.stats.combines, 16);
        assert_eq!(run.strategy, Strategy::Memoized);

        // Second run against the same cache: pure lookup.
        let rerun = evaluate(&Doubling, 16, Strategy::Memoized, &mut cache).unwrap();
        assert_eq!(rerun.value, 65536);
        assert_eq!(rerun.stats.combines, 0);
        assert_eq!(rerun.stats.cache_hits, 1);
    }
}
