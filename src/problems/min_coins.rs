//! Minimum-coin change as a memoizable recurrence.
//!
//! Unbounded variant: each denomination may be used any number of times.
//! f(0) = 0, f(a) = 1 + min over denominations d <= a of f(a - d).
//!
//! "Unreachable" is a legitimate answer here, not a failure: the value type
//! is `Option<u64>` and amounts no denomination chain can reach resolve to
//! `None`. This is the optimal-count counterpart to the greedy solver in
//! [`change`](crate::change), useful for quantifying how far greedy
//! selection lands from optimal on non-canonical sets.

use crate::change::Denominations;
use crate::traits::{Predecessors, Recurrence};

/// Minimum-coin-count recurrence over a validated denomination set.
///
/// The evaluation index is the target amount.
#[derive(Debug, Clone)]
pub struct MinCoinsSpec {
    denominations: Denominations,
}

impl MinCoinsSpec {
    pub fn new(denominations: Denominations) -> Self {
        Self { denominations }
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }
}

impl Recurrence for MinCoinsSpec {
    /// `Some(count)` or `None` when the amount cannot be formed.
    type Value = Option<u64>;

    fn base_case(&self, index: u64) -> Option<Self::Value> {
        (index == 0).then_some(Some(0))
    }

    fn predecessors(&self, index: u64) -> Predecessors {
        self.denominations
            .values()
            .iter()
            .filter(|&&d| d <= index)
            .map(|&d| index - d)
            .collect()
    }

    fn combine(&self, _index: u64, parts: &[Self::Value]) -> Self::Value {
        // Empty parts (no denomination fits) and all-unreachable parts both
        // mean this amount is unreachable.
        parts.iter().copied().flatten().min().map(|best| best + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoCache;
    use crate::evaluator::evaluate_memoized;

    fn solve(denominations: Vec<u64>, amount: i64) -> Option<u64> {
        let spec = MinCoinsSpec::new(Denominations::new(denominations).unwrap());
        let mut cache = MemoCache::new();
        evaluate_memoized(&spec, amount, &mut cache).unwrap()
    }

    #[test]
    fn textbook_instances() {
        // 18 = 6 + 6 + 6 over {10, 6, 1}.
        assert_eq!(solve(vec![10, 6, 1], 18), Some(3));
        assert_eq!(solve(vec![10, 6, 1], 0), Some(0));
        assert_eq!(solve(vec![10, 6, 1], 1), Some(1));
    }

    #[test]
    fn unreachable_amount_is_none_not_an_error() {
        assert_eq!(solve(vec![4, 2], 7), None);
        assert_eq!(solve(vec![2], 3), None);
    }

    #[test]
    fn canonical_set_covers_everything() {
        for amount in 0..=200 {
            assert!(solve(vec![100, 50, 20, 10, 5, 1], amount).is_some());
        }
    }
}
