//! Largest-remainder rebalancing of fractional allocations.
//!
//! The source table stores per-bucket percentages, so multiplying them by a
//! row's vote count yields fractional targets that rarely sum to the count
//! itself. This module repairs that: it truncates each target, then repays
//! the rounding slack one unit at a time, cycling through positions ranked
//! by fractional remainder.

use std::cmp::Ordering;

use thiserror::Error;

/// Inconsistencies the rebalancer refuses to loop on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RebalanceError {
    /// A positive total was requested for an empty set of positions.
    #[error("cannot distribute {surplus} units across zero positions")]
    NoPositions { surplus: u64 },

    /// The truncated allocations overshoot the target by more than can be
    /// removed without driving a position negative.
    #[error("deficit of {deficit} units exceeds the {available} removable units")]
    DeficitExceedsCapacity { deficit: u64, available: u64 },
}

/// Rebalance fractional allocations into integers summing to `target_total`.
///
/// Each value is truncated toward zero to form a provisional allocation. A
/// positive remainder is handed out one unit at a time to positions in
/// descending order of fractional remainder; a negative remainder is repaid
/// in ascending order, skipping positions already at zero so no output ever
/// goes negative. Both rankings use a stable sort, so tied positions keep
/// their original input order.
///
/// # Examples
///
/// ```
/// use emolex_sitegen::algorithms::rebalance_counts;
///
/// let values = [1.0, 0.6, 1.2, 2.4, 1.3, 2.0, 1.5];
/// let balanced = rebalance_counts(&values, 10).unwrap();
/// assert_eq!(balanced.iter().sum::<u64>(), 10);
/// assert_eq!(balanced, vec![1, 1, 1, 2, 1, 2, 2]);
/// ```
pub fn rebalance_counts(values: &[f64], target_total: u64) -> Result<Vec<u64>, RebalanceError> {
    let mut base: Vec<u64> = values.iter().map(|v| v.trunc() as u64).collect();
    let allocated: u64 = base.iter().sum();
    let mut remainder = target_total as i128 - allocated as i128;

    if remainder > 0 {
        if base.is_empty() {
            return Err(RebalanceError::NoPositions {
                surplus: remainder as u64,
            });
        }

        let order = ranked_positions(values, SortDirection::Descending);
        let mut idx = 0usize;
        while remainder > 0 {
            let i = order[idx % order.len()];
            base[i] += 1;
            remainder -= 1;
            idx += 1;
        }
    } else if remainder < 0 {
        let order = ranked_positions(values, SortDirection::Ascending);
        while remainder < 0 {
            let mut progressed = false;
            for &i in &order {
                if remainder == 0 {
                    break;
                }
                if base[i] > 0 {
                    base[i] -= 1;
                    remainder += 1;
                    progressed = true;
                }
            }
            // A full cycle without progress means every position is at zero
            // while units remain to be removed.
            if !progressed {
                return Err(RebalanceError::DeficitExceedsCapacity {
                    deficit: (-remainder) as u64,
                    available: base.iter().sum(),
                });
            }
        }
    }

    Ok(base)
}

enum SortDirection {
    Ascending,
    Descending,
}

/// Position indices ranked by fractional remainder. The sort is stable, so
/// ties keep their input order in both directions.
fn ranked_positions(values: &[f64], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let cmp = values[a]
            .fract()
            .partial_cmp(&values[b].fract())
            .unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    order
}
