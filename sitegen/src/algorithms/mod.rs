//! Numeric allocation algorithms.
//!
//! - [`rebalance`]: largest-remainder rebalancing of fractional vote targets
//!   into an exact integer partition of a known total.

pub mod rebalance;

pub use rebalance::{rebalance_counts, RebalanceError};
