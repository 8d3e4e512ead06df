//! 0/1 knapsack as a memoizable recurrence.
//!
//! The DP state is two-dimensional — (items considered, capacity left) —
//! flattened into the evaluator's single index as
//! `layer * (capacity + 1) + remaining`. Layer 0 (no items considered) is
//! the base case; layer i decides item i-1.
//!
//! f(i, c) = max(f(i-1, c), f(i-1, c - w_i) + v_i if w_i <= c).

use crate::traits::{Predecessors, Recurrence};

/// A candidate item: weight consumed against capacity, value gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// 0/1 knapsack instance over a fixed item list and capacity.
///
/// Valid evaluation indices are the flattened states with
/// `layer <= items.len()` and `remaining <= capacity`; [`target_index`]
/// names the full problem. Indices outside the state space are out of
/// contract.
///
/// [`target_index`]: KnapsackSpec::target_index
#[derive(Debug, Clone)]
pub struct KnapsackSpec {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackSpec {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// Flattened index of the full problem — evaluate this to get the best
    /// achievable value over all items at full capacity.
    pub fn target_index(&self) -> u64 {
        self.flatten(self.items.len() as u64, self.capacity)
    }

    fn flatten(&self, layer: u64, remaining: u64) -> u64 {
        layer * (self.capacity + 1) + remaining
    }

    fn unflatten(&self, index: u64) -> (u64, u64) {
        (index / (self.capacity + 1), index % (self.capacity + 1))
    }
}

impl Recurrence for KnapsackSpec {
    type Value = u64;

    fn base_case(&self, index: u64) -> Option<u64> {
        let (layer, _remaining) = self.unflatten(index);
        (layer == 0).then_some(0)
    }

    fn predecessors(&self, index: u64) -> Predecessors {
        let (layer, remaining) = self.unflatten(index);
        let item = self.items[(layer - 1) as usize];
        let mut preds = Predecessors::from_slice(&[self.flatten(layer - 1, remaining)]);
        if item.weight <= remaining {
            preds.push(self.flatten(layer - 1, remaining - item.weight));
        }
        preds
    }

    fn combine(&self, index: u64, parts: &[u64]) -> u64 {
        let (layer, _remaining) = self.unflatten(index);
        let item = self.items[(layer - 1) as usize];
        let skip = parts[0];
        match parts.get(1) {
            Some(&take) => skip.max(take + item.value),
            None => skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoCache;
    use crate::evaluator::evaluate_memoized;

    fn best(items: Vec<Item>, capacity: u64) -> u64 {
        let spec = KnapsackSpec::new(items, capacity);
        let mut cache = MemoCache::new();
        evaluate_memoized(&spec, spec.target_index() as i64, &mut cache).unwrap()
    }

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(4, 5),
            Item::new(1, 8),
            Item::new(2, 4),
            Item::new(3, 0),
            Item::new(2, 5),
            Item::new(2, 3),
        ]
    }

    #[test]
    fn no_items_no_value() {
        assert_eq!(best(vec![], 0), 0);
        assert_eq!(best(vec![], 100), 0);
    }

    #[test]
    fn sample_at_capacity_3() {
        // (1, 8) + (2, 5) fills weight 3 for value 13.
        assert_eq!(best(sample_items(), 3), 13);
    }

    #[test]
    fn sample_at_capacity_8() {
        // (1, 8) + (2, 4) + (2, 5) + (2, 3) fills weight 7 for value 20.
        assert_eq!(best(sample_items(), 8), 20);
    }

    #[test]
    fn zero_capacity_takes_only_weightless_items() {
        let items = vec![Item::new(0, 7), Item::new(3, 100)];
        assert_eq!(best(items, 0), 7);
    }
}
