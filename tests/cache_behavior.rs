use memo_dp::problems::fibonacci::FibonacciSpec;
use memo_dp::{evaluate, EvalCache, MemoCache, Strategy};

#[test]
fn second_call_against_same_cache_does_no_new_work() {
    let mut cache = MemoCache::new();

    let cold = evaluate(&FibonacciSpec, 40, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(cold.value, 102_334_155);
    assert_eq!(cold.stats.combines, 39);

    let warm = evaluate(&FibonacciSpec, 40, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(warm.value, cold.value);
    assert_eq!(warm.stats.combines, 0);
    assert_eq!(warm.stats.cache_hits, 1);
    assert_eq!(warm.stats.cache_misses, 0);
}

#[test]
fn base_case_indices_never_touch_the_cache() {
    let mut cache = MemoCache::new();

    let f0 = evaluate(&FibonacciSpec, 0, Strategy::Memoized, &mut cache).unwrap();
    let f1 = evaluate(&FibonacciSpec, 1, Strategy::Memoized, &mut cache).unwrap();

    assert_eq!(f0.value, 0);
    assert_eq!(f1.value, 1);
    assert_eq!(f0.stats.combines + f1.stats.combines, 0);
    assert!(cache.is_empty());
}

#[test]
fn empty_cache_populates_on_demand() {
    let mut cache = MemoCache::new();
    assert!(cache.is_empty());

    let run = evaluate(&FibonacciSpec, 14, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(run.value, 377);
    // One combined entry per non-base index 2..=14.
    assert_eq!(cache.len(), 13);
}

#[test]
fn seeded_cache_answers_without_combining() {
    // The explicit replacement for a hard-coded fallback table: warm the
    // cache from outside, then evaluate against it.
    let mut cache: MemoCache<u128> = [
        (2, 1),
        (3, 2),
        (4, 3),
        (5, 5),
        (6, 8),
        (7, 13),
        (8, 21),
        (9, 34),
        (10, 55),
        (11, 89),
        (12, 144),
        (13, 233),
        (14, 377),
    ]
    .into_iter()
    .collect();

    let warm = evaluate(&FibonacciSpec, 14, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(warm.value, 377);
    assert_eq!(warm.stats.combines, 0);

    // Extending past the seeded range only combines the missing indices.
    let extended = evaluate(&FibonacciSpec, 16, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(extended.value, 987);
    assert_eq!(extended.stats.combines, 2);
}

#[test]
fn clear_forces_full_recomputation() {
    let mut cache = MemoCache::new();

    let first = evaluate(&FibonacciSpec, 30, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(first.stats.combines, 29);

    cache.clear();
    let second = evaluate(&FibonacciSpec, 30, Strategy::Memoized, &mut cache).unwrap();
    assert_eq!(second.stats.combines, 29);
    assert_eq!(second.value, first.value);
}
