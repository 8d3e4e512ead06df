//! Fibonacci numbers as a memoizable recurrence.
//!
//! f(0) = 0, f(1) = 1, f(n) = f(n-1) + f(n-2).
//!
//! The naive strategy on this spec is the textbook O(phi^n) recursion; the
//! memoized strategy collapses it to O(n) cold and O(1) warm, which makes
//! the pair the standard demonstration of comparative strategy cost.

use crate::traits::{Predecessors, Recurrence};

/// Fibonacci recurrence instance.
///
/// Values are `u128`; f(186) is the largest Fibonacci number that fits, so
/// indices above 186 panic on overflow rather than wrapping silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct FibonacciSpec;

impl Recurrence for FibonacciSpec {
    type Value = u128;

    fn base_case(&self, index: u64) -> Option<u128> {
        match index {
            0 => Some(0),
            1 => Some(1),
            _ => None,
        }
    }

    fn predecessors(&self, index: u64) -> Predecessors {
        Predecessors::from_slice(&[index - 1, index - 2])
    }

    fn combine(&self, _index: u64, parts: &[u128]) -> u128 {
        parts[0]
            .checked_add(parts[1])
            .expect("Fibonacci overflows u128 past index 186")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoCache;
    use crate::evaluator::{evaluate_memoized, evaluate_naive};

    #[test]
    fn known_prefix() {
        let expected: [u128; 15] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377];
        let mut cache = MemoCache::new();
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(
                evaluate_memoized(&FibonacciSpec, n as i64, &mut cache).unwrap(),
                want
            );
        }
    }

    #[test]
    fn naive_matches_known_values() {
        assert_eq!(evaluate_naive(&FibonacciSpec, 10).unwrap(), 55);
        assert_eq!(evaluate_naive(&FibonacciSpec, 20).unwrap(), 6765);
    }

    #[test]
    fn largest_representable_index() {
        let mut cache = MemoCache::new();
        let f185 = evaluate_memoized(&FibonacciSpec, 185, &mut cache).unwrap();
        assert_eq!(f185, 205_697_230_343_233_228_174_223_751_303_346_572_685);
    }
}
