//! Greedy change-making over a fixed denomination set.
//!
//! [`make_change`] repeatedly emits the largest denomination not exceeding
//! the remaining amount. This is a greedy algorithm: optimal for canonical
//! currency sets such as {100, 50, 20, 10, 5, 1}, but *not* guaranteed
//! optimal for arbitrary sets (for amount 18 over {10, 6, 1} it emits four
//! coins where three suffice). The limitation is inherent to the strategy
//! and deliberately left visible; the optimal *count* for any set is
//! available separately through
//! [`problems::min_coins`](crate::problems::min_coins).

use crate::error::{DomainError, UnreachableAmountError};

/// Validated denomination set: strictly descending positive values.
///
/// Unit coverage (a denomination of 1, or more generally one covering every
/// remainder) is not required here; its absence surfaces at solve time as
/// [`UnreachableAmountError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denominations {
    values: Vec<u64>,
}

impl Denominations {
    /// Validate and wrap a descending denomination list.
    pub fn new(values: Vec<u64>) -> Result<Self, DomainError> {
        if values.is_empty() {
            return Err(DomainError::EmptyDenominations);
        }
        for (position, &value) in values.iter().enumerate() {
            if value == 0 {
                return Err(DomainError::ZeroDenomination(position));
            }
            if position > 0 {
                let previous = values[position - 1];
                if value >= previous {
                    return Err(DomainError::UnsortedDenominations {
                        position,
                        value,
                        previous,
                    });
                }
            }
        }
        Ok(Self { values })
    }

    /// US-style canonical set {100, 50, 20, 10, 5, 1}, for which greedy
    /// selection is provably optimal.
    pub fn canonical() -> Self {
        Self {
            values: vec![100, 50, 20, 10, 5, 1],
        }
    }

    /// Denomination values, largest first.
    pub fn values(&self) -> &[u64] {
        &self.values
    }
}

/// Denominations emitted for an amount, plus diagnostic counters.
///
/// The counters are observables for probes and tests, not semantic state:
/// `turns` counts denominations emitted, `compares` counts denomination
/// comparisons performed while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResult {
    /// Denominations returned, in emission order; they sum to the amount.
    pub coins: Vec<u64>,
    /// Number of denominations emitted.
    pub turns: u64,
    /// Number of denomination comparisons performed.
    pub compares: u64,
}

/// Make change for `amount` by greedy largest-first selection.
///
/// `amount == 0` returns an empty result immediately. If a full scan of
/// the denominations subtracts nothing — the set has no unit covering the
/// remainder — the solver fails with [`UnreachableAmountError`] instead of
/// spinning on the remainder forever.
pub fn make_change(
    amount: u64,
    denominations: &Denominations,
) -> Result<ChangeResult, UnreachableAmountError> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("make_change", amount);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut remaining = amount;
    let mut coins = Vec::new();
    let mut turns = 0u64;
    let mut compares = 0u64;

    while remaining > 0 {
        let mut emitted = false;
        for &denom in denominations.values() {
            compares += 1;
            if remaining >= denom {
                remaining -= denom;
                turns += 1;
                coins.push(denom);
                emitted = true;
                #[cfg(feature = "tracing")]
                tracing::trace!(turn = turns, remaining, denom, "emitted denomination");
                break;
            }
        }
        if !emitted {
            // A full pass subtracted nothing; every further pass would
            // repeat it verbatim.
            return Err(UnreachableAmountError { amount, remaining });
        }
    }

    Ok(ChangeResult {
        coins,
        turns,
        compares,
    })
}
