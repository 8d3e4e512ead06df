use std::env;

use memo_dp::problems::fibonacci::FibonacciSpec;
use memo_dp::problems::min_coins::MinCoinsSpec;
use memo_dp::{
    evaluate, evaluate_memoized, make_change, Denominations, EvalCache, MemoCache, Predecessors,
    Recurrence, Strategy,
};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

/// Fibonacci reduced mod a prime, so deep indices stay in `u64` while the
/// cache keeps one entry per layer. Lives here rather than in the library:
/// it exists to exercise cache growth, not as a reference problem.
struct FibMod {
    modulus: u64,
}

impl Recurrence for FibMod {
    type Value = u64;

    fn base_case(&self, index: u64) -> Option<u64> {
        (index <= 1).then_some(index)
    }

    fn predecessors(&self, index: u64) -> Predecessors {
        Predecessors::from_slice(&[index - 1, index - 2])
    }

    fn combine(&self, _index: u64, parts: &[u64]) -> u64 {
        (parts[0] + parts[1]) % self.modulus
    }
}

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("strategy_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Strategy Probe: naive vs. memoized recurrence evaluation");
    eprintln!("{}", "=".repeat(72));
    eprintln!();

    eprintln!("[1/3] Fibonacci: naive recursion vs. memoized cache...");
    run_fibonacci_race(&options);
    eprintln!();

    eprintln!("[2/3] Change-making: greedy emission vs. optimal count...");
    run_change_demo();
    eprintln!();

    eprintln!("[3/3] Cache growth: one entry per layer, no eviction...");
    run_cache_growth(&options);
    eprintln!();
}

fn run_fibonacci_race(options: &Options) {
    let mut n = 10;
    while n <= options.naive_max {
        let mut cache = MemoCache::new();
        let naive = evaluate(&FibonacciSpec, n as i64, Strategy::Naive, &mut cache)
            .expect("valid index");
        let memoized = evaluate(&FibonacciSpec, n as i64, Strategy::Memoized, &mut cache)
            .expect("valid index");
        debug_assert_eq!(naive.value, memoized.value);

        let speedup = naive.elapsed.as_nanos().max(1) / memoized.elapsed.as_nanos().max(1);
        eprintln!(
            "  fib({n}) = {v}: naive {naive_us}us / {naive_combines} combines, \
             memoized {memo_us}us / {memo_combines} combines ({speedup}x)",
            v = naive.value,
            naive_us = naive.elapsed.as_micros(),
            naive_combines = naive.stats.combines,
            memo_us = memoized.elapsed.as_micros(),
            memo_combines = memoized.stats.combines,
        );

        n += 5;
    }
}

fn run_change_demo() {
    let canonical = Denominations::canonical();
    let change = make_change(34, &canonical).expect("canonical set covers every amount");
    eprintln!(
        "  34 over {:?}: coins {:?}, {} turns, {} compares",
        canonical.values(),
        change.coins,
        change.turns,
        change.compares
    );

    // Greedy is not optimal off canonical sets: 18 over {10, 6, 1}.
    let skewed = Denominations::new(vec![10, 6, 1]).expect("valid set");
    let greedy = make_change(18, &skewed).expect("unit denomination present");
    let spec = MinCoinsSpec::new(skewed);
    let mut cache = MemoCache::new();
    let optimal = evaluate_memoized(&spec, 18, &mut cache)
        .expect("valid amount")
        .expect("reachable amount");
    eprintln!(
        "  18 over [10, 6, 1]: greedy emits {} coins {:?}, optimal count is {}",
        greedy.turns, greedy.coins, optimal
    );
}

fn run_cache_growth(options: &Options) {
    let spec = FibMod {
        modulus: 1_000_000_007,
    };
    let mut cache = MemoCache::new();

    let before = rss_kib();
    let run = evaluate(
        &spec,
        options.deep_index as i64,
        Strategy::Memoized,
        &mut cache,
    )
    .expect("valid index");
    let after = rss_kib();

    eprintln!(
        "  fib({n}) mod 1e9+7 = {v} in {ms}ms: {entries} cache entries, \
         RSS delta {delta} KiB",
        n = options.deep_index,
        v = run.value,
        ms = run.elapsed.as_millis(),
        entries = cache.len(),
        delta = after.saturating_sub(before),
    );
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    let Ok(pid) = get_current_pid() else {
        return 0;
    };
    match sys.process(pid) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

struct Options {
    /// Largest index handed to the naive strategy (it is exponential).
    naive_max: u64,
    /// Index for the cache-growth run.
    deep_index: u64,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Options {
            naive_max: 30,
            deep_index: 1_000_000,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--naive-max" => options.naive_max = next_value(&mut args, &arg)?,
                "--deep" => options.deep_index = next_value(&mut args, &arg)?,
                "-h" | "--help" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                other => return Err(format!("unknown argument `{other}`")),
            }
        }
        if options.naive_max > 45 {
            return Err("--naive-max above 45 is impractical for the naive strategy".into());
        }
        Ok(options)
    }

    fn print_help() {
        eprintln!("usage: strategy_probe [--naive-max N] [--deep N]");
        eprintln!("  --naive-max N  largest index for the naive strategy (default 30, cap 45)");
        eprintln!("  --deep N       index for the memoized cache-growth run (default 1000000)");
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<u64, String> {
    let raw = args
        .next()
        .ok_or_else(|| format!("{flag} expects a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag} expects an integer, got `{raw}`"))
}
